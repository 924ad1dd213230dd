use yew::{AttrValue, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: IconId,
    #[prop_or_default]
    pub description: Option<AttrValue>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat bg-base-200 rounded-box shadow-sm">
            <div class="stat-figure text-primary">
                <Icon icon_id={props.icon} class="w-6 h-6" />
            </div>
            <div class="stat-title uppercase text-xs tracking-wider">{&props.title}</div>
            <div class="stat-value text-2xl">{&props.value}</div>
            if let Some(description) = &props.description {
                <div class="stat-desc">{description}</div>
            }
        </div>
    }
}
