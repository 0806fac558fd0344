use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TattooStyle {
    #[default]
    Realistic,
    Traditional,
    Watercolor,
    Tribal,
    Geometric,
    Blackwork,
}

impl TattooStyle {
    /// Display order.
    pub const ALL: [TattooStyle; 6] = [
        TattooStyle::Realistic,
        TattooStyle::Traditional,
        TattooStyle::Watercolor,
        TattooStyle::Tribal,
        TattooStyle::Geometric,
        TattooStyle::Blackwork,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            TattooStyle::Realistic => "realistic",
            TattooStyle::Traditional => "traditional",
            TattooStyle::Watercolor => "watercolor",
            TattooStyle::Tribal => "tribal",
            TattooStyle::Geometric => "geometric",
            TattooStyle::Blackwork => "blackwork",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TattooStyle::Realistic => "Realistic",
            TattooStyle::Traditional => "Traditional",
            TattooStyle::Watercolor => "Watercolor",
            TattooStyle::Tribal => "Tribal",
            TattooStyle::Geometric => "Geometric",
            TattooStyle::Blackwork => "Blackwork",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, ValidationError> {
        TattooStyle::ALL
            .into_iter()
            .find(|style| style.id() == id)
            .ok_or_else(|| ValidationError::UnknownStyle(id.to_string()))
    }
}

impl fmt::Display for TattooStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One allowed SDXL output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
    pub name: &'static str,
}

/// SDXL only accepts these sizes. The first entry is the default.
pub const DIMENSIONS: [Dimensions; 9] = [
    Dimensions { width: 1024, height: 1024, name: "Square (1024x1024)" },
    Dimensions { width: 1152, height: 896, name: "Landscape (1152x896)" },
    Dimensions { width: 896, height: 1152, name: "Portrait (896x1152)" },
    Dimensions { width: 1216, height: 832, name: "Wide (1216x832)" },
    Dimensions { width: 832, height: 1216, name: "Tall (832x1216)" },
    Dimensions { width: 1344, height: 768, name: "Extra Wide (1344x768)" },
    Dimensions { width: 768, height: 1344, name: "Extra Tall (768x1344)" },
    Dimensions { width: 1536, height: 640, name: "Panoramic (1536x640)" },
    Dimensions { width: 640, height: 1536, name: "Vertical (640x1536)" },
];

impl Dimensions {
    pub fn default_entry() -> &'static Dimensions {
        &DIMENSIONS[0]
    }

    pub fn find(width: u32, height: u32) -> Option<&'static Dimensions> {
        DIMENSIONS
            .iter()
            .find(|dim| dim.width == width && dim.height == height)
    }

    pub fn lookup(width: u32, height: u32) -> Result<&'static Dimensions, ValidationError> {
        Self::find(width, height)
            .ok_or(ValidationError::UnsupportedDimensions { width, height })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleEntry {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogDefaults {
    pub style: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Everything a form needs to offer only valid choices.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub styles: Vec<StyleEntry>,
    pub dimensions: Vec<Dimensions>,
    pub defaults: CatalogDefaults,
}

impl Catalog {
    pub fn current() -> Self {
        let default_dims = Dimensions::default_entry();
        Catalog {
            styles: TattooStyle::ALL
                .iter()
                .map(|style| StyleEntry {
                    id: style.id(),
                    name: style.name(),
                })
                .collect(),
            dimensions: DIMENSIONS.to_vec(),
            defaults: CatalogDefaults {
                style: TattooStyle::default().id(),
                width: default_dims.width,
                height: default_dims.height,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_ids_round_trip_in_display_order() {
        let ids: Vec<&str> = TattooStyle::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            ["realistic", "traditional", "watercolor", "tribal", "geometric", "blackwork"]
        );
        for style in TattooStyle::ALL {
            assert_eq!(TattooStyle::from_id(style.id()), Ok(style));
        }
    }

    #[test]
    fn test_unknown_style_is_rejected() {
        assert_eq!(
            TattooStyle::from_id("Traditional"),
            Err(ValidationError::UnknownStyle("Traditional".into()))
        );
        assert!(TattooStyle::from_id("neo-traditional").is_err());
    }

    #[test]
    fn test_style_serde_uses_ids() {
        let json = serde_json::to_string(&TattooStyle::Blackwork).unwrap();
        assert_eq!(json, "\"blackwork\"");
        let style: TattooStyle = serde_json::from_str("\"watercolor\"").unwrap();
        assert_eq!(style, TattooStyle::Watercolor);
    }

    #[test]
    fn test_dimension_catalog() {
        assert_eq!(DIMENSIONS.len(), 9);
        assert_eq!(Dimensions::default_entry().width, 1024);
        assert_eq!(Dimensions::default_entry().height, 1024);
        assert_eq!(Dimensions::find(1536, 640).map(|d| d.name), Some("Panoramic (1536x640)"));
        // orientation matters
        assert!(Dimensions::find(896, 1152).is_some());
        assert!(Dimensions::find(1152, 1152).is_none());
        assert_eq!(
            Dimensions::lookup(512, 512),
            Err(ValidationError::UnsupportedDimensions {
                width: 512,
                height: 512
            })
        );
    }

    #[test]
    fn test_catalog_defaults_match_first_entries() {
        let catalog = Catalog::current();
        assert_eq!(catalog.styles.len(), 6);
        assert_eq!(catalog.styles[0].id, catalog.defaults.style);
        assert_eq!(catalog.dimensions[0].width, catalog.defaults.width);
        assert_eq!(catalog.dimensions[0].height, catalog.defaults.height);
    }
}
