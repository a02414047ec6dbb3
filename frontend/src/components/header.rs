use yew::prelude::*;

use crate::config::BRAND_NAME;
use crate::navigation::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: SectionId,
    pub menu_open: bool,
    pub on_navigate: Callback<SectionId>,
    pub on_toggle_menu: Callback<()>,
    pub on_open_config: Callback<()>,
}

fn nav_button(id: SectionId, active: SectionId, on_navigate: &Callback<SectionId>, base: &'static str) -> Html {
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(id))
    };
    let tone = if id == active {
        "text-indigo-500"
    } else {
        "text-gray-300 hover:text-indigo-400"
    };
    html! {
        <button key={id.as_str()} class={classes!(base, tone)} onclick={onclick}>
            {id.label()}
        </button>
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_toggle = props.on_toggle_menu.reform(|_: MouseEvent| ());
    let on_open_config = props.on_open_config.reform(|_: MouseEvent| ());

    let mobile_menu = if props.menu_open {
        html! {
            <div class="md:hidden bg-gray-800/90 backdrop-blur-md border-t border-gray-700">
                <div class="container mx-auto px-4 py-3 flex flex-col space-y-3">
                    { for SectionId::ALL.into_iter().map(|id| nav_button(id, props.active, &props.on_navigate, "py-2")) }
                    <button
                        class="bg-gradient-to-r from-indigo-500 to-purple-600 hover:from-indigo-600 hover:to-purple-700 text-white py-2 rounded-lg mt-2"
                        onclick={on_open_config.clone()}
                    >
                        {"Get VLESS Config"}
                    </button>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <header class="fixed w-full bg-gray-900/95 backdrop-blur-sm z-50 border-b border-gray-800">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <div class="text-2xl font-bold bg-gradient-to-r from-indigo-500 to-purple-600 bg-clip-text text-transparent">
                    {BRAND_NAME}
                </div>
                <nav class="hidden md:flex space-x-8">
                    { for SectionId::ALL.into_iter().map(|id| nav_button(id, props.active, &props.on_navigate, "transition-colors")) }
                </nav>
                <div class="hidden md:block">
                    <button
                        class="bg-gradient-to-r from-indigo-500 to-purple-600 hover:from-indigo-600 hover:to-purple-700 text-white px-6 py-2 rounded-lg transition-all duration-300 transform hover:scale-105 hover:shadow-lg"
                        onclick={on_open_config}
                    >
                        {"Get VLESS Config"}
                    </button>
                </div>
                <button class="md:hidden text-gray-300" aria-label="Toggle menu" onclick={on_toggle}>
                    <svg xmlns="http://www.w3.org/2000/svg" class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                    </svg>
                </button>
            </div>
            {mobile_menu}
        </header>
    }
}
