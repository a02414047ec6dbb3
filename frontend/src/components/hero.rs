use yew::prelude::*;

use crate::config::DEMO_NOTICE;
use crate::navigation::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub section_ref: NodeRef,
    pub on_open_config: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    // no downloads in the demo build
    let on_download = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(DEMO_NOTICE);
        }
    });
    let on_open_config = props.on_open_config.reform(|_: MouseEvent| ());

    html! {
        <section
            ref={props.section_ref.clone()}
            id={SectionId::Home.as_str()}
            class="pt-28 pb-16 md:pt-32 md:pb-20 px-4 container mx-auto"
        >
            <div class="max-w-4xl mx-auto text-center">
                <h1 class="text-4xl md:text-6xl font-bold mb-6">
                    <span class="bg-gradient-to-r from-indigo-500 to-purple-600 bg-clip-text text-transparent">
                        {"Secure Your Connection"}
                    </span>
                    <br />
                    {"with AHMED VPN"}
                </h1>
                <p class="text-xl md:text-2xl text-gray-300 mb-10">
                    {"Experience lightning-fast and secure internet access with our revolutionary VLESS protocol technology. Protect your privacy and access content anywhere in the world."}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <button
                        class="bg-gradient-to-r from-indigo-500 to-purple-600 hover:from-indigo-600 hover:to-purple-700 text-white py-3 px-8 rounded-lg text-lg font-medium transition-all duration-300 transform hover:scale-105 hover:shadow-lg"
                        onclick={on_download}
                    >
                        {"Download App"}
                    </button>
                    <button
                        class="bg-gray-800 hover:bg-gray-700 text-white py-3 px-8 rounded-lg text-lg font-medium transition-all duration-300"
                        onclick={on_open_config}
                    >
                        {"Get VLESS Config"}
                    </button>
                </div>
                <div class="mt-12 flex justify-center">
                    <img
                        src="https://picsum.photos/800/400"
                        alt="VPN Illustration"
                        loading="lazy"
                        class="rounded-xl shadow-2xl w-full max-w-3xl"
                    />
                </div>
            </div>
        </section>
    }
}
