//! Colors that tell modules apart

use std::collections::{BTreeSet, HashMap};

use csscolorparser::Color;
use once_cell::sync::Lazy;

use crate::EventCollection;


/// How many distinct colors modules can have. Modules share colors beyond this.
pub const PALETTE_SIZE: usize = 8;

static PALETTE_CSS: [&str; PALETTE_SIZE] = [
    "hsl(217, 91%, 60%)",
    "hsl(142, 71%, 45%)",
    "hsl(38, 92%, 50%)",
    "hsl(0, 84%, 60%)",
    "hsl(262, 83%, 58%)",
    "hsl(188, 86%, 40%)",
    "hsl(330, 81%, 60%)",
    "hsl(24, 95%, 53%)",
];

static PALETTE: Lazy<Vec<Color>> = Lazy::new(|| {
    PALETTE_CSS.iter()
        .map(|css| csscolorparser::parse(css).expect("palette colors are valid CSS colors"))
        .collect()
});

/// The palette colors, the color of index `i` being at position `i - 1`
pub fn palette() -> &'static [Color] {
    &PALETTE
}


/// Assigns a color index (from 1 to [`PALETTE_SIZE`]) to every module.
///
/// Indices are given in module name order, so that they do not depend on the order modules are looked up.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModuleColors {
    indices: HashMap<String, usize>,
}

impl ModuleColors {
    pub fn from_modules<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = modules.into_iter()
            .map(|m| m.as_ref().to_string())
            .collect();

        let indices = sorted.into_iter()
            .enumerate()
            .map(|(i, module)| (module, i % PALETTE_SIZE + 1))
            .collect();
        Self { indices }
    }

    pub fn from_collection(collection: &EventCollection) -> Self {
        Self::from_modules(collection.modules())
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns `None` for modules that were not known when this was created
    pub fn index_of(&self, module: &str) -> Option<usize> {
        self.indices.get(module).copied()
    }

    /// The CSS class of a module, e.g. `module-3`
    pub fn class_of(&self, module: &str) -> Option<String> {
        self.index_of(module).map(|i| format!("module-{}", i))
    }

    pub fn color_of(&self, module: &str) -> Option<&'static Color> {
        self.index_of(module).map(|i| &palette()[i - 1])
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_palette() {
        assert_eq!(palette().len(), PALETTE_SIZE);
        let (r, g, b, a) = palette()[3].rgba_u8();
        assert!(r > g && r > b);
        assert_eq!(a, 255);
    }

    #[test]
    fn test_indices_do_not_depend_on_lookup_order() {
        let left = ModuleColors::from_modules(vec!["MAT101", "ART300", "FIS200", "MAT101"]);
        let right = ModuleColors::from_modules(vec!["FIS200", "MAT101", "ART300"]);
        assert_eq!(left, right);
        assert_eq!(left.len(), 3);

        assert_eq!(left.index_of("ART300"), Some(1));
        assert_eq!(left.index_of("FIS200"), Some(2));
        assert_eq!(left.index_of("MAT101"), Some(3));
        assert_eq!(left.class_of("MAT101").as_deref(), Some("module-3"));
        assert_eq!(left.color_of("ART300"), Some(&palette()[0]));

        assert_eq!(left.index_of("unknown"), None);
        assert_eq!(left.class_of("unknown"), None);
    }

    #[test]
    fn test_indices_wrap_around() {
        let modules: Vec<String> = (0..10).map(|i| format!("M{:02}", i)).collect();
        let colors = ModuleColors::from_modules(&modules);
        assert_eq!(colors.index_of("M07"), Some(8));
        assert_eq!(colors.index_of("M08"), Some(1));
        assert_eq!(colors.index_of("M09"), Some(2));
    }

    #[test]
    fn test_from_collection() {
        let collection = EventCollection::new(crate::records::parse(
            "h\nA;P;C;Z;01/02/2024;01/02/2024\nB;P;C;Y;01/02/2024;01/02/2024\n"));
        let colors = ModuleColors::from_collection(&collection);
        assert_eq!(colors.index_of("Y"), Some(1));
        assert_eq!(colors.index_of("Z"), Some(2));
        assert!(ModuleColors::default().is_empty());
    }
}
