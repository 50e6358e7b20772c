//! Mapping between element ids and the piece of the widget they render.

/// An interactive or styled piece of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Container,
    Header,
    Value,
    Placeholder,
    /// Badge for the n-th selected option.
    Badge(usize),
    /// Remove marker on the n-th badge.
    Remove(usize),
    Clear,
    Divider,
    Caret,
    Options,
    /// Row for the n-th option.
    Option(usize),
}

impl Part {
    /// Element id of this part inside the selector `root`.
    pub fn id(&self, root: &str) -> String {
        match self {
            Part::Container => root.to_string(),
            Part::Header => format!("{root}-header"),
            Part::Value => format!("{root}-value"),
            Part::Placeholder => format!("{root}-placeholder"),
            Part::Badge(i) => format!("{root}-badge-{i}"),
            Part::Remove(i) => format!("{root}-remove-{i}"),
            Part::Clear => format!("{root}-clear"),
            Part::Divider => format!("{root}-divider"),
            Part::Caret => format!("{root}-caret"),
            Part::Options => format!("{root}-options"),
            Part::Option(i) => format!("{root}-opt-{i}"),
        }
    }

    /// Recover the part an element id belongs to, or None if the id is not
    /// part of selector `root`.
    pub fn parse(root: &str, id: &str) -> Option<Part> {
        if id == root {
            return Some(Part::Container);
        }
        let rest = id.strip_prefix(root)?.strip_prefix('-')?;

        let indexed = |prefix: &str| -> Option<usize> { rest.strip_prefix(prefix)?.parse().ok() };

        match rest {
            "header" => Some(Part::Header),
            "value" => Some(Part::Value),
            "placeholder" => Some(Part::Placeholder),
            "clear" => Some(Part::Clear),
            "divider" => Some(Part::Divider),
            "caret" => Some(Part::Caret),
            "options" => Some(Part::Options),
            _ => indexed("badge-")
                .map(Part::Badge)
                .or_else(|| indexed("remove-").map(Part::Remove))
                .or_else(|| indexed("opt-").map(Part::Option)),
        }
    }
}

/// Whether selector ids `a` and `b` would claim each other's part ids,
/// as `"letters"` and `"letters-clear"` do.
pub fn collides(a: &str, b: &str) -> bool {
    a != b && (Part::parse(a, b).is_some() || Part::parse(b, a).is_some())
}
