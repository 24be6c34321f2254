use serde::Serialize;

/// Leading character Python uses by convention to mark non-public members.
const MARKER: char = '_';
const DOUBLE_MARKER: &str = "__";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// Infers visibility from Python's underscore naming convention.
    ///
    /// The private rule is checked first: a name with two or more leading
    /// underscores is private unless it also ends with two underscores
    /// (`__init__` style names stay public). A single leading underscore is
    /// protected. Everything else is public. This is a heuristic only; Python
    /// itself enforces none of it.
    pub fn from_member_name(name: &str) -> Self {
        if name.starts_with(DOUBLE_MARKER) && !name.ends_with(DOUBLE_MARKER) {
            Visibility::Private
        } else if name.starts_with(MARKER) {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Protected => '#',
            Visibility::Private => '-',
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
pub struct Member {
    pub visibility: Visibility,
    pub name: String,
}

impl Member {
    pub fn new(visibility: Visibility, name: impl Into<String>) -> Self {
        Self {
            visibility,
            name: name.into(),
        }
    }

    /// Symbol followed by name, e.g. `#_helper`.
    pub fn label(&self) -> String {
        format!("{}{}", self.visibility.symbol(), self.name)
    }
}

/// One discovered class with its members and declared bases.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ClassRecord {
    name: String,
    attributes: Vec<Member>,
    methods: Vec<Member>,
    bases: Vec<String>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            methods: Vec::new(),
            bases: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Member] {
        &self.attributes
    }

    pub fn methods(&self) -> &[Member] {
        &self.methods
    }

    pub fn bases(&self) -> &[String] {
        &self.bases
    }

    /// Adds a class-level attribute. Attributes are always public; a repeated
    /// name keeps the first occurrence. Returns whether it was added.
    pub fn add_attribute(&mut self, name: impl Into<String>) -> bool {
        let member = Member::new(Visibility::Public, name);
        if self.attributes.iter().any(|a| a.name == member.name) {
            return false;
        }
        self.attributes.push(member);
        true
    }

    /// Adds a method, inferring its visibility. Redefinitions of the same
    /// name keep the first occurrence. Returns whether it was added.
    pub fn add_method(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.methods.iter().any(|m| m.name == name) {
            return false;
        }
        self.methods
            .push(Member::new(Visibility::from_member_name(&name), name));
        true
    }

    pub fn add_base(&mut self, base: impl Into<String>) {
        self.bases.push(base.into());
    }

    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        self.add_attribute(name);
        self
    }

    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.add_method(name);
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.add_base(base);
        self
    }

    /// Rendered attribute labels in lexicographic order.
    pub fn sorted_attribute_labels(&self) -> Vec<String> {
        sorted_labels(&self.attributes)
    }

    /// Rendered method labels in lexicographic order, without the `()` suffix.
    pub fn sorted_method_labels(&self) -> Vec<String> {
        sorted_labels(&self.methods)
    }

    /// Folds a later definition of the same class into this one: members are
    /// unioned with first-wins semantics, unseen bases are appended in order.
    fn absorb(&mut self, other: ClassRecord) {
        for attribute in other.attributes {
            self.add_attribute(attribute.name);
        }
        for method in other.methods {
            self.add_method(method.name);
        }
        for base in other.bases {
            if !self.bases.contains(&base) {
                self.bases.push(base);
            }
        }
    }
}

fn sorted_labels(members: &[Member]) -> Vec<String> {
    let mut labels: Vec<String> = members.iter().map(Member::label).collect();
    labels.sort();
    labels
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InheritanceEdge {
    pub base: String,
    pub derived: String,
}

/// The structural model of one analysis run, in declaration order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DiagramModel {
    classes: Vec<ClassRecord>,
}

impl DiagramModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> &[ClassRecord] {
        &self.classes
    }

    pub fn class(&self, name: &str) -> Option<&ClassRecord> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Inheritance edges, one per declared base, ordered by owning class and
    /// then by base declaration order.
    pub fn edges(&self) -> Vec<InheritanceEdge> {
        self.classes
            .iter()
            .flat_map(|class| {
                class.bases.iter().map(move |base| InheritanceEdge {
                    base: base.clone(),
                    derived: class.name.clone(),
                })
            })
            .collect()
    }

    /// Appends a class record. A record whose name is already present is
    /// merged into the existing one instead of producing a second block.
    pub(crate) fn push(&mut self, record: ClassRecord) {
        match self.classes.iter_mut().find(|c| c.name == record.name) {
            Some(existing) => existing.absorb(record),
            None => self.classes.push(record),
        }
    }

    /// Merges another model into this one, keeping this model's classes first.
    pub(crate) fn merge(&mut self, other: DiagramModel) {
        for record in other.classes {
            self.push(record);
        }
    }
}

impl FromIterator<ClassRecord> for DiagramModel {
    fn from_iter<I: IntoIterator<Item = ClassRecord>>(iter: I) -> Self {
        let mut model = DiagramModel::new();
        for record in iter {
            model.push(record);
        }
        model
    }
}

/// Result of extraction: either a non-empty model or an explicit "no classes"
/// outcome, which is not an error.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "model", rename_all = "lowercase")]
pub enum Extraction {
    Classes(DiagramModel),
    Empty,
}

impl Extraction {
    pub fn from_model(model: DiagramModel) -> Self {
        if model.is_empty() {
            Extraction::Empty
        } else {
            Extraction::Classes(model)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Extraction::Empty)
    }

    pub fn into_model(self) -> Option<DiagramModel> {
        match self {
            Extraction::Classes(model) => Some(model),
            Extraction::Empty => None,
        }
    }
}
