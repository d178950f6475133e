use yew::{function_component, html, Html};
use yew_router::{BrowserRouter, Switch};

use crate::{
    navbar::ResponsiveNav,
    route::{switch, Route},
};

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <ResponsiveNav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
