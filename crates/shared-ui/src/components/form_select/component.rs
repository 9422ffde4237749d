use dioxus::prelude::*;

/// Native `<select>` styled to match the inputs.
///
/// Children should be `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    /// Current selected value.
    #[props(default)]
    value: String,
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default = false)]
    disabled: bool,
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form-select", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            value: value,
            disabled: disabled,
            onchange: move |evt| {
                if let Some(handler) = &onchange {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}
