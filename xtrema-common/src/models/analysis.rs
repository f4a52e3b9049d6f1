use std::fmt;

use serde::{Deserialize, Serialize};

/// The five fixed waste categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WasteCategory {
    Plastic,
    Glass,
    Cardboard,
    Metal,
    Trash,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 5] = [
        WasteCategory::Plastic,
        WasteCategory::Glass,
        WasteCategory::Cardboard,
        WasteCategory::Metal,
        WasteCategory::Trash,
    ];

    /// JSON field name used by the analysis schema.
    pub fn field_name(&self) -> &'static str {
        match self {
            WasteCategory::Plastic => "plastic",
            WasteCategory::Glass => "glass",
            WasteCategory::Cardboard => "cardboard",
            WasteCategory::Metal => "metal",
            WasteCategory::Trash => "trash",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WasteCategory::Plastic => "Plastic",
            WasteCategory::Glass => "Glass",
            WasteCategory::Cardboard => "Cardboard",
            WasteCategory::Metal => "Metal",
            WasteCategory::Trash => "Trash",
        }
    }
}

impl fmt::Display for WasteCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Percentage breakdown of an image across the five categories.
///
/// Values are expected to lie in [0, 100] and sum to 100, but nothing here
/// enforces that: the producer is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WasteAnalysis {
    pub plastic: f64,
    pub glass: f64,
    pub cardboard: f64,
    pub metal: f64,
    pub trash: f64,
}

impl WasteAnalysis {
    pub const fn new(plastic: f64, glass: f64, cardboard: f64, metal: f64, trash: f64) -> Self {
        Self { plastic, glass, cardboard, metal, trash }
    }

    pub fn value(&self, category: WasteCategory) -> f64 {
        match category {
            WasteCategory::Plastic => self.plastic,
            WasteCategory::Glass => self.glass,
            WasteCategory::Cardboard => self.cardboard,
            WasteCategory::Metal => self.metal,
            WasteCategory::Trash => self.trash,
        }
    }

    /// Category/value pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (WasteCategory, f64)> + '_ {
        WasteCategory::ALL.iter().map(move |c| (*c, self.value(*c)))
    }

    pub fn total(&self) -> f64 {
        self.entries().map(|(_, v)| v).sum()
    }

    /// Category with the largest share. The earliest category wins ties.
    pub fn dominant(&self) -> WasteCategory {
        let mut best = (WasteCategory::Plastic, self.plastic);
        for (category, value) in self.entries().skip(1) {
            if value > best.1 {
                best = (category, value);
            }
        }
        best.0
    }
}
