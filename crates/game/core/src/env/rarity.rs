use crate::math::LinearColor;
use crate::state::ItemRarity;

/// One row of the rarity presentation table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RarityRow {
    pub rarity: ItemRarity,
    pub glow_color: LinearColor,
    /// Bright tint for the pickup widget.
    pub light_color: LinearColor,
    /// Dim tint for the pickup widget.
    pub dark_color: LinearColor,
    pub stars: u8,
    /// Custom depth stencil value selecting the outline color.
    pub custom_depth_stencil: u8,
}

/// Read-only access to rarity presentation rows.
pub trait RarityOracle: Send + Sync {
    fn row(&self, rarity: ItemRarity) -> Option<&RarityRow>;
}

impl RarityOracle for [RarityRow] {
    fn row(&self, rarity: ItemRarity) -> Option<&RarityRow> {
        self.iter().find(|row| row.rarity == rarity)
    }
}

impl RarityOracle for Vec<RarityRow> {
    fn row(&self, rarity: ItemRarity) -> Option<&RarityRow> {
        self.as_slice().row(rarity)
    }
}
