use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One column of the canonical import layout.
///
/// Declaration order is the output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    Sku,
    Barcode,
    Description,
    Brand,
    Category,
    Size,
    Flavor,
    Ncm,
    CommercialUnit,
    Origin,
    Cest,
    FractionUnit,
    DefaultRule,
    Cost,
    Price,
    Height,
    Width,
    Depth,
    NetWeight,
    GrossWeight,
    PhotoUrl,
    InternalId,
}

/// How a canonical field is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// SKU sanitizing plus row filtering.
    Identifier,
    /// Digit-only barcode/EAN.
    Barcode,
    /// 8-digit NCM.
    FiscalCode,
    /// Unit descriptor resolved to a unit code.
    CommercialUnit,
    /// Fiscal origin resolved to the target origin code.
    Origin,
    /// Derived from the commercial unit.
    FractionUnit,
    /// Brazilian two-decimal money/measure.
    Monetary,
    /// Copied from the source as-is.
    Text,
}

/// Fields rendered as comma-decimal strings.
pub const MONETARY_FIELDS: [CanonicalField; 7] = [
    CanonicalField::Cost,
    CanonicalField::Price,
    CanonicalField::NetWeight,
    CanonicalField::GrossWeight,
    CanonicalField::Height,
    CanonicalField::Width,
    CanonicalField::Depth,
];

impl CanonicalField {
    /// All fields in output order.
    pub const ALL: [CanonicalField; 22] = [
        CanonicalField::Sku,
        CanonicalField::Barcode,
        CanonicalField::Description,
        CanonicalField::Brand,
        CanonicalField::Category,
        CanonicalField::Size,
        CanonicalField::Flavor,
        CanonicalField::Ncm,
        CanonicalField::CommercialUnit,
        CanonicalField::Origin,
        CanonicalField::Cest,
        CanonicalField::FractionUnit,
        CanonicalField::DefaultRule,
        CanonicalField::Cost,
        CanonicalField::Price,
        CanonicalField::Height,
        CanonicalField::Width,
        CanonicalField::Depth,
        CanonicalField::NetWeight,
        CanonicalField::GrossWeight,
        CanonicalField::PhotoUrl,
        CanonicalField::InternalId,
    ];

    /// Stable snake_case key used in mapping files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            CanonicalField::Sku => "sku",
            CanonicalField::Barcode => "barcode",
            CanonicalField::Description => "description",
            CanonicalField::Brand => "brand",
            CanonicalField::Category => "category",
            CanonicalField::Size => "size",
            CanonicalField::Flavor => "flavor",
            CanonicalField::Ncm => "ncm",
            CanonicalField::CommercialUnit => "commercial_unit",
            CanonicalField::Origin => "origin",
            CanonicalField::Cest => "cest",
            CanonicalField::FractionUnit => "fraction_unit",
            CanonicalField::DefaultRule => "default_rule",
            CanonicalField::Cost => "cost",
            CanonicalField::Price => "price",
            CanonicalField::Height => "height",
            CanonicalField::Width => "width",
            CanonicalField::Depth => "depth",
            CanonicalField::NetWeight => "net_weight",
            CanonicalField::GrossWeight => "gross_weight",
            CanonicalField::PhotoUrl => "photo_url",
            CanonicalField::InternalId => "internal_id",
        }
    }

    /// Column header expected by the downstream importer.
    pub fn label(&self) -> &'static str {
        match self {
            CanonicalField::Sku => "SKU Externo",
            CanonicalField::Barcode => "Código de Barras",
            CanonicalField::Description => "Descrição",
            CanonicalField::Brand => "Marca",
            CanonicalField::Category => "Categoria",
            CanonicalField::Size => "Tam/Qtde",
            CanonicalField::Flavor => "Sabor/Cor",
            CanonicalField::Ncm => "NCM",
            CanonicalField::CommercialUnit => "Un Comercial",
            CanonicalField::Origin => "Origem do Produto",
            CanonicalField::Cest => "CEST",
            CanonicalField::FractionUnit => "Unidade/Fração",
            CanonicalField::DefaultRule => "Regra Padrão",
            CanonicalField::Cost => "Custo",
            CanonicalField::Price => "Venda",
            CanonicalField::Height => "Altura",
            CanonicalField::Width => "Largura",
            CanonicalField::Depth => "Profundidade",
            CanonicalField::NetWeight => "Peso Liquido",
            CanonicalField::GrossWeight => "Peso Bruto",
            CanonicalField::PhotoUrl => "URL da foto",
            CanonicalField::InternalId => "ID Interno",
        }
    }

    /// Returns true for members of the mandatory field set.
    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            CanonicalField::Sku
                | CanonicalField::Description
                | CanonicalField::Ncm
                | CanonicalField::CommercialUnit
                | CanonicalField::Origin
                | CanonicalField::FractionUnit
                | CanonicalField::DefaultRule
                | CanonicalField::NetWeight
                | CanonicalField::GrossWeight
        )
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            CanonicalField::Sku => FieldKind::Identifier,
            CanonicalField::Barcode => FieldKind::Barcode,
            CanonicalField::Ncm => FieldKind::FiscalCode,
            CanonicalField::CommercialUnit => FieldKind::CommercialUnit,
            CanonicalField::Origin => FieldKind::Origin,
            CanonicalField::FractionUnit => FieldKind::FractionUnit,
            CanonicalField::Cost
            | CanonicalField::Price
            | CanonicalField::Height
            | CanonicalField::Width
            | CanonicalField::Depth
            | CanonicalField::NetWeight
            | CanonicalField::GrossWeight => FieldKind::Monetary,
            _ => FieldKind::Text,
        }
    }

    /// Output labels in column order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(CanonicalField::label).collect()
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CanonicalField {
    type Err = ModelError;

    /// Accepts the key (`net_weight`, `net-weight`) or the output label
    /// (`Peso Liquido`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let as_key = trimmed.to_lowercase().replace(['-', ' '], "_");
        let lowered = trimmed.to_lowercase();
        Self::ALL
            .iter()
            .find(|field| field.key() == as_key || field.label().to_lowercase() == lowered)
            .copied()
            .ok_or_else(|| ModelError::UnknownField {
                name: trimmed.to_string(),
            })
    }
}
