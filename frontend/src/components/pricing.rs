use yew::prelude::*;

use crate::content::{Plan, PLANS};
use crate::navigation::SectionId;

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub plan: Plan,
}

/// Plan buttons are placeholders until checkout exists.
#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let plan = props.plan;
    let button_class = if plan.featured {
        "w-full bg-gradient-to-r from-indigo-500 to-purple-600 hover:from-indigo-600 hover:to-purple-700 text-white py-3 rounded-lg transition-colors"
    } else {
        "w-full bg-indigo-600 hover:bg-indigo-700 text-white py-3 rounded-lg transition-colors"
    };
    html! {
        <div class={classes!(
            "bg-gray-800", "p-8", "rounded-xl", "hover:bg-gray-700/50", "transition-all", "duration-300", "hover:shadow-xl",
            plan.featured.then_some("hover:-translate-y-2"),
        )}>
            <h3 class="text-2xl font-bold mb-2">{plan.name}</h3>
            <p class="text-gray-400 mb-4">{plan.tagline}</p>
            <div class="text-4xl font-bold mb-6 text-indigo-500">{plan.price}</div>
            <ul class="space-y-3 mb-8">
                { for plan.perks.iter().map(|perk| html! {
                    <li key={*perk} class="flex items-center">
                        <svg class="w-5 h-5 text-indigo-500 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7"></path>
                        </svg>
                        {*perk}
                    </li>
                }) }
            </ul>
            <button type="button" class={button_class}>{plan.cta}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub section_ref: NodeRef,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    html! {
        <section
            ref={props.section_ref.clone()}
            id={SectionId::Pricing.as_str()}
            class="py-16 px-4 bg-gray-800/30"
        >
            <div class="container mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12">
                    {"Pricing "}<span class="text-indigo-500">{"Plans"}</span>
                </h2>
                <div class="grid md:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    { for PLANS.iter().map(|plan| html! { <PricingCard key={plan.name} plan={*plan} /> }) }
                </div>
            </div>
        </section>
    }
}
