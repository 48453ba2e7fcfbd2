//! Declarative component tree.
//!
//! Children are owned by their parent, so a tree loaded from configuration or
//! built in code is always acyclic.

use serde::Deserialize;

/// One UI unit to scaffold: a directory plus one file per component kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Component {
    /// Dash-separated name, used for the directory and file base names
    pub name: String,
    #[serde(default, alias = "inputList")]
    pub inputs: Vec<String>,
    #[serde(default, alias = "outputList")]
    pub outputs: Vec<String>,
    #[serde(default)]
    pub children: Vec<Component>,
    /// Stores this component reads from or writes to
    #[serde(default, alias = "retrievesDataFrom")]
    pub stores: Vec<Store>,
}

impl Component {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_inputs<I, S>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_store(mut self, store: Store) -> Self {
        self.stores.push(store);
        self
    }
}

/// A named data-access unit. Produces one store file beside its component.
///
/// The capability flags are carried through but do not yet change which
/// template is used.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub name: String,
    #[serde(default, alias = "can_get")]
    pub can_get: bool,
    #[serde(default, alias = "can_put")]
    pub can_put: bool,
    #[serde(default, alias = "can_patch")]
    pub can_patch: bool,
    #[serde(default, alias = "can_delete")]
    pub can_delete: bool,
}

impl Store {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

/// The connection list tree: a container holding a list holding a preview,
/// with the container reading from the `connection` store.
pub fn example_tree() -> Vec<Component> {
    let preview = Component::new("connection-preview")
        .with_inputs(["connection"])
        .with_outputs(["onAccountClick"]);

    let store = Store { can_get: true, can_patch: false, ..Store::new("connection") };

    vec![Component::new("connection-list-container")
        .with_child(Component::new("connection-list").with_child(preview))
        .with_store(store)]
}
