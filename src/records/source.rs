use std::fmt;

/// Origin website. The display name is the value written to the
/// dataset's `source` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Jiji,
    BuyRentKenya,
}

impl Source {
    pub fn label(&self) -> &'static str {
        match self {
            Source::Jiji => "jiji.co.ke",
            Source::BuyRentKenya => "BuyRentKenya",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
