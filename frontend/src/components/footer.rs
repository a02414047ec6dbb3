use yew::prelude::*;

use crate::config::BRAND_NAME;
use crate::content::{LEGAL_LINKS, QUICK_LINKS, SOCIAL_LINKS};
use crate::navigation::SectionId;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<SectionId>,
}

fn social_icon(name: &str) -> &'static str {
    match name {
        "Twitter" => "fab fa-twitter",
        "LinkedIn" => "fab fa-linkedin-in",
        "Facebook" => "fab fa-facebook-f",
        "Instagram" => "fab fa-instagram",
        _ => "fas fa-link",
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="bg-gray-900 border-t border-gray-800 py-12 px-4">
            <div class="container mx-auto">
                <div class="grid md:grid-cols-4 gap-8">
                    <div>
                        <h3 class="text-2xl font-bold bg-gradient-to-r from-indigo-500 to-purple-600 bg-clip-text text-transparent mb-4">
                            {BRAND_NAME}
                        </h3>
                        <p class="text-gray-400">
                            {"Secure your internet connection with our advanced VLESS protocol technology."}
                        </p>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">{"Quick Links"}</h4>
                        <ul class="space-y-2">
                            { for QUICK_LINKS.into_iter().map(|(label, id)| {
                                let on_navigate = props.on_navigate.clone();
                                let onclick = Callback::from(move |_: MouseEvent| on_navigate.emit(id));
                                html! {
                                    <li key={label}>
                                        <button class="text-gray-400 hover:text-indigo-400 transition-colors" onclick={onclick}>
                                            {label}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">{"Legal"}</h4>
                        <ul class="space-y-2">
                            { for LEGAL_LINKS.into_iter().map(|policy| html! {
                                <li key={policy}>
                                    <a href="#" class="text-gray-400 hover:text-indigo-400 transition-colors">{policy}</a>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-lg font-semibold mb-4">{"Connect"}</h4>
                        <div class="flex space-x-4 mb-4">
                            { for SOCIAL_LINKS.into_iter().map(|social| html! {
                                <a
                                    key={social}
                                    href="#"
                                    aria-label={social}
                                    class="w-10 h-10 rounded-full bg-gray-800 flex items-center justify-center text-gray-400 hover:text-indigo-400 hover:bg-gray-700 transition-colors"
                                >
                                    <i class={social_icon(social)}></i>
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
                <div class="border-t border-gray-800 mt-8 pt-8 text-center text-gray-500">
                    <p>{format!("© 2023 {}. All rights reserved.", BRAND_NAME)}</p>
                </div>
            </div>
        </footer>
    }
}
