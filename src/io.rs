use crate::error::MatrixError;
use crate::matrix::{Element, SquareMatrix};
use std::io::Read;

impl SquareMatrix {
    pub(crate) fn new_from_str(yaml: &'_ str) -> Result<Self, MatrixError> {
        let grid: Vec<Vec<Element>> = serde_yaml::from_str(yaml)?;
        Self::from_grid(grid)
    }

    pub(crate) fn new_from_reader<T: Read>(reader: T) -> Result<Self, MatrixError> {
        let grid: Vec<Vec<Element>> = serde_yaml::from_reader(reader)?;
        Self::from_grid(grid)
    }

    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    pub(crate) fn new_from_json_str(json: &'_ str) -> Result<Self, MatrixError> {
        let grid: Vec<Vec<Element>> = serde_json::from_str(json)?;
        Self::from_grid(grid)
    }

    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    pub(crate) fn new_from_json_reader<T: Read>(reader: T) -> Result<Self, MatrixError> {
        let grid: Vec<Vec<Element>> = serde_json::from_reader(reader)?;
        Self::from_grid(grid)
    }

    /// Return a representation of the matrix as a YAML string.
    ///
    /// The document is a sequence of rows.
    ///
    /// # Error
    ///
    /// Will return an error if `serde_yaml::to_string`
    /// returns an error.
    pub fn as_string(&self) -> Result<String, MatrixError> {
        match serde_yaml::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }

    /// Return a representation of the matrix as a JSON string.
    ///
    /// # Error
    ///
    /// Will return an error if `serde_json::to_string`
    /// returns an error.
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    pub fn as_json_string(&self) -> Result<String, MatrixError> {
        match serde_json::to_string(self) {
            Ok(string) => Ok(string),
            Err(e) => Err(e.into()),
        }
    }
}
