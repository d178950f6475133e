use dbanswan_core::types::NavItem;
use yew::{html, Html};
use yew_router::Routable;

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/projects")]
    Projects,
    #[at("/blog")]
    Blog,
    #[at("/learning")]
    Learning,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<&NavItem> for Route {
    fn from(item: &NavItem) -> Self {
        Route::recognize(item.href).unwrap_or(Route::NotFound)
    }
}

pub fn switch(route: Route) -> Html {
    let title = match route {
        Route::Home => "Home",
        Route::Projects => "Projects",
        Route::Blog => "Blog",
        Route::Learning => "Learning",
        Route::NotFound => "Not found",
    };
    html! {
        <main class="max-w-7xl mx-auto px-4 pt-24 sm:px-6 lg:px-8">
            <h1 class="text-3xl font-bold">{ title }</h1>
        </main>
    }
}
