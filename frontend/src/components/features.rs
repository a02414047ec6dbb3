use yew::prelude::*;

use crate::content::FEATURES;
use crate::navigation::SectionId;

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub section_ref: NodeRef,
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    html! {
        <section
            ref={props.section_ref.clone()}
            id={SectionId::Features.as_str()}
            class="py-16 px-4 bg-gray-800/30"
        >
            <div class="container mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                    {"Why Choose "}<span class="text-indigo-500">{"AHMED"}</span>{" VPN?"}
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    { for FEATURES.iter().map(|feature| html! {
                        <div key={feature.title} class="bg-gray-800 p-6 rounded-xl hover:bg-gray-700/50 transition-all duration-300 hover:shadow-xl hover:-translate-y-2">
                            <div class="text-4xl mb-4">{feature.icon}</div>
                            <h3 class="text-xl font-semibold mb-2">{feature.title}</h3>
                            <p class="text-gray-400">{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
