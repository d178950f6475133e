pub mod lock;
pub mod menu;
pub mod types;

#[cfg(test)]
mod testing;
