use yew::virtual_dom::VNode;

/// Flattened view of a rendered node: tag names, attributes and text in
/// document order.
#[derive(Debug, Default)]
pub struct Outline {
    pub tags: Vec<String>,
    pub attrs: Vec<(String, String)>,
    pub text: String,
}

impl Outline {
    pub fn of(node: &VNode) -> Self {
        let mut outline = Self::default();
        outline.walk(node);
        outline
    }

    fn walk(&mut self, node: &VNode) {
        match node {
            VNode::VTag(tag) => {
                self.tags.push(tag.tag().to_string());
                for (key, value) in tag.attributes.iter() {
                    self.attrs.push((key.to_string(), value.to_string()));
                }
                for child in tag.children().iter() {
                    self.walk(child);
                }
            }
            VNode::VList(list) => {
                for child in list.iter() {
                    self.walk(child);
                }
            }
            VNode::VText(text) => self.text.push_str(&text.text),
            _ => {}
        }
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag == name)
    }

    /// First value of `key`, outermost element first.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attrs
            .iter()
            .any(|(k, v)| k == "class" && v.split_whitespace().any(|c| c == class))
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::{Document, Element};

    wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

    pub fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Fresh element appended to `<body>` for an app to render into.
    pub fn mount_point() -> Element {
        let document = document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    /// Lets the renderer and any queued `spawn_local` tasks run.
    pub async fn settle() {
        gloo_timers::future::TimeoutFuture::new(50).await;
    }
}
