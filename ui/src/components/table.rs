use dioxus::prelude::*;

#[component]
pub fn Table(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        table { class: "table {class}", {children} }
    }
}

#[component]
pub fn TableHeader(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        thead { class: "table-header {class}", {children} }
    }
}

#[component]
pub fn TableBody(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        tbody { class: "table-body {class}", {children} }
    }
}

#[component]
pub fn TableRow(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        tr { class: "table-row {class}", {children} }
    }
}

#[component]
pub fn TableHead(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        th { class: "table-head {class}", {children} }
    }
}

#[component]
pub fn TableCell(#[props(default = "".to_string())] class: String, children: Element) -> Element {
    rsx! {
        td { class: "table-cell {class}", {children} }
    }
}
