use yew::prelude::*;

use crate::content::STEPS;
use crate::navigation::SectionId;

#[derive(Properties, PartialEq)]
pub struct HowItWorksProps {
    pub section_ref: NodeRef,
}

#[function_component(HowItWorks)]
pub fn how_it_works(props: &HowItWorksProps) -> Html {
    html! {
        <section
            ref={props.section_ref.clone()}
            id={SectionId::How.as_str()}
            class="py-16 px-4 container mx-auto"
        >
            <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                {"How It "}<span class="text-indigo-500">{"Works"}</span>
            </h2>
            <div class="max-w-4xl mx-auto">
                <div class="relative">
                    <div class="absolute left-6 md:left-1/2 transform -translate-x-1/2 h-full w-0.5 bg-gradient-to-b from-indigo-500 to-purple-600"></div>
                    { for STEPS.iter().enumerate().map(|(index, step)| {
                        // alternate sides of the timeline on wide screens
                        let side = if index % 2 == 0 { "md:pr-[50%]" } else { "md:pl-[50%]" };
                        html! {
                            <div key={step.title} class={classes!("mb-16", "relative", side)}>
                                <div class="bg-gray-800 p-6 rounded-xl shadow-lg relative z-10 ml-12 md:ml-0">
                                    <div class="absolute left-0 top-1/2 transform -translate-y-1/2 -translate-x-1/2">
                                        <div class="w-12 h-12 rounded-full bg-gradient-to-r from-indigo-500 to-purple-600 flex items-center justify-center text-white font-bold text-xl">
                                            {index + 1}
                                        </div>
                                    </div>
                                    <h3 class="text-xl font-semibold mb-2">{step.title}</h3>
                                    <p class="text-gray-400">{step.description}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
