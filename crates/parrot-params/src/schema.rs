#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Value type accepted by a declared option.
pub enum OptionKind {
    Text,
    Integer,
    Flag,
}

impl OptionKind {
    pub fn takes_value(self) -> bool {
        !matches!(self, Self::Flag)
    }

    pub fn metavar(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("TEXT"),
            Self::Integer => Some("INT"),
            Self::Flag => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One `--name` entry of an [`OptionSchema`].
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    pub help: &'static str,
}

impl OptionSpec {
    pub const fn text(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Text,
            help,
        }
    }

    pub const fn integer(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Integer,
            help,
        }
    }

    pub const fn flag(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            kind: OptionKind::Flag,
            help,
        }
    }
}

const PRINTER_OPTIONS: &[OptionSpec] = &[
    OptionSpec::text("name", "Name parameter"),
    OptionSpec::integer("age", "Age parameter"),
    OptionSpec::text("city", "City parameter"),
    OptionSpec::text("output", "Output file parameter"),
    OptionSpec::flag("verbose", "Enable verbose output"),
    OptionSpec::flag("debug", "Enable debug mode"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Statically declared option table consumed by the generic classifier.
///
/// Declaration order drives report order: named values and flags are listed
/// in the order their specs appear here, regardless of input order.
pub struct OptionSchema {
    specs: Vec<OptionSpec>,
    tolerate_unknown: bool,
}

impl OptionSchema {
    pub fn new(specs: impl Into<Vec<OptionSpec>>) -> Self {
        Self {
            specs: specs.into(),
            tolerate_unknown: false,
        }
    }

    /// The `--name/--age/--city/--output/--verbose/--debug` schema of `print-params`.
    pub fn printer() -> Self {
        Self::new(PRINTER_OPTIONS)
    }

    /// When set, unrecognized `-x`/`--x` tokens are kept as positionals instead of failing.
    pub fn with_tolerate_unknown(mut self, tolerate_unknown: bool) -> Self {
        self.tolerate_unknown = tolerate_unknown;
        self
    }

    pub fn tolerate_unknown(&self) -> bool {
        self.tolerate_unknown
    }

    pub fn specs(&self) -> &[OptionSpec] {
        &self.specs
    }

    pub fn lookup(&self, name: &str) -> Option<(usize, &OptionSpec)> {
        self.specs
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.name == name)
    }

    pub fn value_specs(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.iter().filter(|spec| spec.kind.takes_value())
    }

    pub fn flag_specs(&self) -> impl Iterator<Item = &OptionSpec> {
        self.specs.iter().filter(|spec| !spec.kind.takes_value())
    }
}
