use super::Element;

// Helper functions for common elements
pub fn element(tag: &str) -> Element {
    Element::new(tag)
}

pub fn a() -> Element {
    Element::new("a")
}

pub fn body() -> Element {
    Element::new("body")
}

pub fn button() -> Element {
    Element::new("button")
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn fieldset() -> Element {
    Element::new("fieldset")
}

pub fn form() -> Element {
    Element::new("form")
}

pub fn input() -> Element {
    Element::new("input")
}

pub fn label() -> Element {
    Element::new("label")
}

pub fn option() -> Element {
    Element::new("option")
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn select() -> Element {
    Element::new("select")
}

pub fn span() -> Element {
    Element::new("span")
}

pub fn textarea() -> Element {
    Element::new("textarea")
}

pub fn checkbox() -> Element {
    Element::new("input").attr("type", "checkbox")
}

pub fn radio() -> Element {
    Element::new("input").attr("type", "radio")
}

pub fn text_input(name: &str, value: &str) -> Element {
    Element::new("input")
        .attr("type", "text")
        .attr("name", name)
        .attr("value", value)
}

pub fn hidden_input(name: &str, value: &str) -> Element {
    Element::new("input")
        .attr("type", "hidden")
        .attr("name", name)
        .attr("value", value)
}

pub fn submit_button(label: &str) -> Element {
    Element::new("button")
        .attr("type", "submit")
        .class("btn")
        .class("btn-primary")
        .text(label)
}
