use chrono::NaiveDate;

/// Pure automobile model shared between layers (no serde/schema concerns).
///
/// `id` is generated by the store and stays internal; `vin` is the key every
/// caller-facing operation uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automobile {
    pub id: i32,
    pub year: i32,
    pub make: String,
    pub model: String,
    pub color: Option<String>,
    pub owner: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub vin: String,
}

/// Data for creating a new automobile; already validated by the REST layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAutomobile {
    pub year: i32,
    pub make: String,
    pub model: String,
    pub color: Option<String>,
    pub owner: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub vin: String,
}

impl NewAutomobile {
    pub fn new(
        year: i32,
        make: impl Into<String>,
        model: impl Into<String>,
        vin: impl Into<String>,
    ) -> Self {
        Self {
            year,
            make: make.into(),
            model: model.into(),
            color: None,
            owner: None,
            purchase_date: None,
            vin: vin.into(),
        }
    }
}

/// Partial update: only color and owner are mutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutomobilePatch {
    pub color: Option<String>,
    pub owner: Option<String>,
}

impl AutomobilePatch {
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.owner.is_none()
    }

    /// Overwrite only the fields present in the patch.
    pub fn apply_to(self, auto: &mut Automobile) {
        if let Some(color) = self.color {
            auto.color = Some(color);
        }
        if let Some(owner) = self.owner {
            auto.owner = Some(owner);
        }
    }
}

/// Ordered collection of automobiles as returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AutosList {
    automobiles: Vec<Automobile>,
}

impl AutosList {
    pub fn new(automobiles: Vec<Automobile>) -> Self {
        Self { automobiles }
    }

    pub fn is_empty(&self) -> bool {
        self.automobiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.automobiles.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Automobile> {
        self.automobiles.iter()
    }
}

impl From<Vec<Automobile>> for AutosList {
    fn from(automobiles: Vec<Automobile>) -> Self {
        Self::new(automobiles)
    }
}

impl FromIterator<Automobile> for AutosList {
    fn from_iter<I: IntoIterator<Item = Automobile>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for AutosList {
    type Item = Automobile;
    type IntoIter = std::vec::IntoIter<Automobile>;

    fn into_iter(self) -> Self::IntoIter {
        self.automobiles.into_iter()
    }
}
