use dbanswan_core::{
    menu::MobileMenu,
    types::{bar_appearance, is_scrolled, BRAND, NAV_ITEMS},
};
use gloo_events::EventListener;
use yew::{
    function_component, html, use_effect_with_deps, use_mut_ref, use_state, use_state_eq,
    Callback, Html, MouseEvent, Properties, UseStateHandle,
};
use yew_router::prelude::Link;

use crate::{
    body::DocumentBody,
    icon::{Icon, IconKind, ICON_SIZE},
    route::Route,
};

fn scroll_listener(scrolled: UseStateHandle<bool>) -> Option<EventListener> {
    let window = match web_sys::window() {
        Some(window) => window,
        None => {
            log::error!("failed to get window");
            return None;
        }
    };
    let target = window.clone();
    Some(EventListener::new(&window, "scroll", move |_| {
        match target.scroll_y() {
            Ok(offset) => scrolled.set(is_scrolled(offset)),
            Err(err) => log::error!("failed to read scroll offset: {:?}", err),
        }
    }))
}

#[derive(Properties, PartialEq)]
pub struct MobileOverlayProps {
    pub on_toggle: Callback<MouseEvent>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(MobileOverlay)]
pub fn mobile_overlay(props: &MobileOverlayProps) -> Html {
    html! {
        <div class="fixed inset-0 z-50 bg-white bg-opacity-20 backdrop-blur-lg md:hidden overflow-y-auto">
            <button
                onclick={props.on_toggle.clone()}
                class="fixed top-4 right-4 p-2 rounded-md bg-gray-800 text-white"
                aria-label="Close menu"
            >
                <Icon kind={IconKind::Close} size={ICON_SIZE} />
            </button>
            <div class="flex flex-col items-center justify-center min-h-screen gap-8 py-20">
                {
                    for NAV_ITEMS.iter().map(|item| html! {
                        // the link navigates, the click bubbling up here closes the overlay
                        <div key={item.href} class="mobile-nav-item" onclick={props.on_close.clone()}>
                            <Link<Route>
                                to={Route::from(item)}
                                classes="text-2xl font-medium hover:underline underline-offset-4"
                            >
                                { item.label }
                            </Link<Route>>
                        </div>
                    })
                }
            </div>
        </div>
    }
}

#[function_component(ResponsiveNav)]
pub fn responsive_nav() -> Html {
    let is_open = use_state(|| false);
    let scrolled = use_state_eq(|| false);
    let menu = use_mut_ref::<Option<MobileMenu<DocumentBody>>, _>(|| None);

    use_effect_with_deps(
        {
            let scrolled = scrolled.clone();
            let menu = menu.clone();
            move |_| {
                *menu.borrow_mut() = DocumentBody::get().map(MobileMenu::new);
                let listener = scroll_listener(scrolled);
                log::debug!("navigation mounted");
                move || {
                    drop(listener);
                    // dropping the menu unlocks the body even if the overlay is still open
                    menu.borrow_mut().take();
                    log::debug!("navigation unmounted");
                }
            }
        },
        (),
    );

    let toggle_menu = {
        let is_open = is_open.clone();
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let open = match menu.borrow_mut().as_mut() {
                Some(menu) => menu.toggle(),
                None => !*is_open,
            };
            is_open.set(open);
        })
    };
    let close_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(menu) = menu.borrow_mut().as_mut() {
                menu.close();
            }
            is_open.set(false);
        })
    };

    html! {
        <>
            <nav class={format!(
                "fixed top-0 left-0 right-0 z-10 transition-all duration-300 {}",
                bar_appearance(*scrolled)
            )}>
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <div class="flex-shrink-0">
                            <span class="text-xl font-bold">{ BRAND }</span>
                        </div>
                        <div class="hidden md:flex gap-6">
                            {
                                for NAV_ITEMS.iter().map(|item| html! {
                                    <Link<Route>
                                        key={item.href}
                                        to={Route::from(item)}
                                        classes="text-lg font-medium hover:underline underline-offset-4"
                                    >
                                        { item.label }
                                    </Link<Route>>
                                })
                            }
                        </div>
                        <button
                            onclick={toggle_menu.clone()}
                            class="md:hidden p-2 rounded-md bg-gray-800 text-white"
                            aria-label="Open menu"
                        >
                            <Icon kind={IconKind::Menu} size={ICON_SIZE} />
                        </button>
                    </div>
                </div>
            </nav>
            if *is_open {
                <MobileOverlay on_toggle={toggle_menu} on_close={close_menu} />
            }
        </>
    }
}
