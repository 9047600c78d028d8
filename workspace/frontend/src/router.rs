use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::about::About;
use crate::components::dashboard::Dashboard;
use crate::components::layout::layout::Layout;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Dashboard => {
            log::trace!("Rendering Dashboard page");
            html! { <Layout title="Prediksi Curah Hujan"><Dashboard /></Layout> }
        }
        Route::About => {
            log::trace!("Rendering About page");
            html! { <Layout title="Tentang"><About /></Layout> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"404 Not Found"}</h1></Layout> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::About.to_path(), "/about");
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
