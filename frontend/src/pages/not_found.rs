use yew::prelude::*;
use yew_router::prelude::Link;

use crate::config::BRAND_NAME;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen bg-gray-900 text-gray-100 flex flex-col items-center justify-center px-4 text-center">
            <div class="text-2xl font-bold bg-gradient-to-r from-indigo-500 to-purple-600 bg-clip-text text-transparent mb-6">
                {BRAND_NAME}
            </div>
            <h1 class="text-4xl font-bold mb-4">{"Page not found"}</h1>
            <p class="text-gray-400 mb-8">{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="bg-gradient-to-r from-indigo-500 to-purple-600 text-white px-6 py-2 rounded-lg">
                {"Back to home"}
            </Link<Route>>
        </div>
    }
}
