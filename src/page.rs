use anyhow::Context as _;
use kuchiki::traits::TendrilSink as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};
use regex::Regex;

pub const LIGHT_MODE_CLASS: &str = "light-mode";

pub struct Page {
    document: NodeRef,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self {
            document: kuchiki::parse_html().one(html),
        }
    }

    pub fn select_first(&self, selector: &str) -> Option<NodeDataRef<ElementData>> {
        self.document.select_first(selector).ok()
    }

    pub fn toggle_control(&self, toggle_id: &str) -> Option<NodeDataRef<ElementData>> {
        self.select_first(&format!("#{toggle_id}"))
    }

    pub fn flash_messages(&self, flash_class: &str) -> Vec<NodeDataRef<ElementData>> {
        match self.document.select(&format!(".{flash_class}")) {
            Ok(nodes) => nodes.collect(),
            Err(()) => Vec::new(),
        }
    }

    pub fn is_light(&self) -> bool {
        let Some(body) = self.select_first("body") else {
            return false;
        };
        let attrs = body.attributes.borrow();
        attrs
            .get("class")
            .is_some_and(|c| c.split_whitespace().any(|t| t == LIGHT_MODE_CLASS))
    }

    pub fn set_light(&self, on: bool) {
        let Some(body) = self.select_first("body") else {
            return;
        };
        let mut attrs = body.attributes.borrow_mut();
        let current = attrs.get("class").unwrap_or("").to_string();
        let mut classes: Vec<&str> = current
            .split_whitespace()
            .filter(|t| *t != LIGHT_MODE_CLASS)
            .collect();
        if on {
            classes.push(LIGHT_MODE_CLASS);
        }
        if classes.is_empty() {
            attrs.remove("class");
        } else {
            attrs.insert("class", classes.join(" "));
        }
    }

    pub fn serialize(&self) -> anyhow::Result<String> {
        let mut out = Vec::new();
        self.document.serialize(&mut out).context("serialize page")?;
        String::from_utf8(out).context("page html not utf-8")
    }
}

pub fn set_text(node: &NodeDataRef<ElementData>, text: &str) {
    let node = node.as_node();
    while let Some(child) = node.first_child() {
        child.detach();
    }
    node.append(NodeRef::new_text(text));
}

pub fn set_opacity(node: &NodeDataRef<ElementData>, value: &str) {
    let re = Regex::new(r"(?i)opacity\s*:\s*[^;]*").expect("opacity regex");
    let mut attrs = node.attributes.borrow_mut();
    let style = attrs.get("style").unwrap_or("").trim().to_string();
    let updated = if re.is_match(&style) {
        re.replace(&style, format!("opacity: {value}")).into_owned()
    } else if style.is_empty() {
        format!("opacity: {value}")
    } else if style.ends_with(';') {
        format!("{style} opacity: {value}")
    } else {
        format!("{style}; opacity: {value}")
    };
    attrs.insert("style", updated);
}
