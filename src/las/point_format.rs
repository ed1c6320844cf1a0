//! Point formats: which fields a point record has, and the
//! user defined extra dimensions appended after them.

use crate::las::extra_dims::{ScalarType, MAX_DOCUMENTED_ELEMENTS};
use crate::LasError;
use std::fmt;

/// Max number of bytes of the name & description of an extra dimension
pub const MAX_EXTRA_DIMENSION_STR_LEN: usize = 32;

/// Description of an extra dimension (also called extra bytes)
/// stored after the standard fields of each point.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraDimension {
    pub name: String,
    pub description: String,
    pub scalar_type: ScalarType,
    pub num_elements: u8,
    pub scales: Option<Vec<f64>>,
    pub offsets: Option<Vec<f64>>,
}

impl ExtraDimension {
    pub fn new<S: Into<String>>(name: S, scalar_type: ScalarType, num_elements: u8) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            scalar_type,
            num_elements,
            scales: None,
            offsets: None,
        }
    }

    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_scales(mut self, scales: Vec<f64>) -> Self {
        self.scales = Some(scales);
        self
    }

    pub fn with_offsets(mut self, offsets: Vec<f64>) -> Self {
        self.offsets = Some(offsets);
        self
    }

    /// Number of bytes this dimension takes in each point
    pub fn size(&self) -> u16 {
        self.scalar_type.size() * u16::from(self.num_elements)
    }

    /// Arrays of more than 3 bytes have no data type code,
    /// they are stored as 'undocumented extra bytes'.
    pub fn is_undocumented_byte_array(&self) -> bool {
        self.num_elements > MAX_DOCUMENTED_ELEMENTS && self.scalar_type == ScalarType::U8
    }

    fn invalid(&self, reason: &str) -> LasError {
        LasError::InvalidExtraDimension {
            name: self.name.clone(),
            reason: reason.to_owned(),
        }
    }

    pub(crate) fn validate(&self) -> crate::Result<()> {
        if self.name.is_empty() {
            return Err(self.invalid("the name cannot be empty"));
        }
        for s in &[&self.name, &self.description] {
            if !s.is_ascii() || s.len() > MAX_EXTRA_DIMENSION_STR_LEN {
                return Err(self.invalid("name and description must be at most 32 ASCII bytes"));
            }
        }
        if self.num_elements == 0 {
            return Err(self.invalid("it must have at least one element"));
        }
        if self.num_elements > MAX_DOCUMENTED_ELEMENTS && !self.is_undocumented_byte_array() {
            return Err(self.invalid("only u8 dimensions can have more than 3 elements"));
        }
        for (what, values) in &[("scales", &self.scales), ("offsets", &self.offsets)] {
            if let Some(values) = values {
                if self.num_elements > MAX_DOCUMENTED_ELEMENTS {
                    return Err(LasError::InvalidExtraDimension {
                        name: self.name.clone(),
                        reason: format!("{} are not allowed on byte arrays", what),
                    });
                }
                if values.len() != usize::from(self.num_elements) {
                    return Err(LasError::InvalidExtraDimension {
                        name: self.name.clone(),
                        reason: format!(
                            "expected {} {}, got {}",
                            self.num_elements,
                            what,
                            values.len()
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointFormat {
    id: u8,
    extra_dimensions: Vec<ExtraDimension>,
}

impl PointFormat {
    /// Size of the standard fields of each point format
    const STANDARD_SIZES: [u16; 11] = [20, 28, 26, 34, 57, 63, 30, 36, 38, 59, 67];

    pub fn new(id: u8) -> crate::Result<Self> {
        if usize::from(id) >= Self::STANDARD_SIZES.len() {
            return Err(LasError::UnsupportedPointFormat(id));
        }
        Ok(Self {
            id,
            extra_dimensions: vec![],
        })
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    /// Point formats 6 to 10, introduced with LAS 1.4
    pub fn is_extended(&self) -> bool {
        self.id >= 6
    }

    /// Size of a point without its extra dimensions
    pub fn standard_size(&self) -> u16 {
        Self::STANDARD_SIZES[usize::from(self.id)]
    }

    pub fn num_extra_bytes(&self) -> u16 {
        self.extra_dimensions.iter().map(ExtraDimension::size).sum()
    }

    /// Size of a point, including its extra dimensions
    pub fn size(&self) -> u16 {
        self.standard_size() + self.num_extra_bytes()
    }

    pub fn extra_dimensions(&self) -> &[ExtraDimension] {
        &self.extra_dimensions
    }

    pub fn extra_dimension(&self, name: &str) -> Option<&ExtraDimension> {
        self.extra_dimensions.iter().find(|dim| dim.name == name)
    }

    pub fn add_extra_dimension(&mut self, dimension: ExtraDimension) -> crate::Result<()> {
        dimension.validate()?;
        if self.extra_dimension(&dimension.name).is_some() {
            return Err(dimension.invalid("a dimension with the same name already exists"));
        }
        if u32::from(self.size()) + u32::from(dimension.size()) > u32::from(u16::MAX) {
            return Err(dimension.invalid("the point size would not fit in 16 bits"));
        }
        self.extra_dimensions.push(dimension);
        Ok(())
    }

    pub fn remove_extra_dimension(&mut self, name: &str) -> crate::Result<ExtraDimension> {
        let position = self
            .extra_dimensions
            .iter()
            .position(|dim| dim.name == name)
            .ok_or_else(|| LasError::NoSuchExtraDimension(name.to_owned()))?;
        Ok(self.extra_dimensions.remove(position))
    }
}

impl fmt::Display for PointFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<PointFormat({}, {} bytes of extra dims)>",
            self.id,
            self.num_extra_bytes()
        )
    }
}
