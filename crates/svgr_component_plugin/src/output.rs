use rustc_hash::FxHashMap;

/// Output entries keyed by their emitted file name.
pub type OutputBundle = FxHashMap<String, Output>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
  Chunk(Box<OutputChunk>),
  Asset(Box<OutputAsset>),
}

impl Output {
  /// Chunks always have a name, assets only when they were emitted with one.
  pub fn name(&self) -> Option<&str> {
    match self {
      Output::Chunk(chunk) => Some(&chunk.name),
      Output::Asset(asset) => asset.name.as_deref(),
    }
  }

  pub fn is_asset(&self) -> bool {
    matches!(self, Output::Asset(_))
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputChunk {
  pub file_name: String,
  pub name: String,
  pub code: String,
  pub is_entry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputAsset {
  pub file_name: String,
  /// The name the asset was emitted with, usually the original file name.
  pub name: Option<String>,
  pub source: Vec<u8>,
}

impl OutputAsset {
  pub fn new(file_name: impl Into<String>, name: Option<String>, source: impl Into<Vec<u8>>) -> Self {
    Self {
      file_name: file_name.into(),
      name,
      source: source.into(),
    }
  }
}

impl From<OutputAsset> for Output {
  fn from(asset: OutputAsset) -> Self {
    Output::Asset(Box::new(asset))
  }
}

impl From<OutputChunk> for Output {
  fn from(chunk: OutputChunk) -> Self {
    Output::Chunk(Box::new(chunk))
  }
}
