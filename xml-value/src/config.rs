/// Settings for a single serialize or deserialize call
///
/// This is a plain value; build it once and share it, there is no process wide state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	/// `version` in the XML declaration written by the serializer
	pub version: String,
	/// `encoding` in the XML declaration written by the serializer
	///
	/// Output is always UTF-8 text; this only sets the header.
	pub encoding: String,
	/// Maximum element nesting depth (0 means unlimited)
	pub max_depth: usize,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			version: "1.0".into(),
			encoding: "UTF-8".into(),
			max_depth: Self::DEFAULT_MAX_DEPTH,
		}
	}
}

impl Config {
	/// Nesting limit used by `Config::default()`
	pub const DEFAULT_MAX_DEPTH: usize = 256;

	/// Set the declared XML version
	pub fn with_version(mut self, version: impl Into<String>) -> Self {
		self.version = version.into();
		self
	}

	/// Set the declared encoding
	pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
		self.encoding = encoding.into();
		self
	}

	/// Set the nesting limit (0 means unlimited)
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Disable the nesting limit
	pub fn unlimited_depth(self) -> Self {
		self.with_max_depth(0)
	}

	/// Whether `depth` (1 for the root element) is beyond the limit
	pub(crate) fn exceeds_depth(&self, depth: usize) -> bool {
		depth_exceeded(self.max_depth, depth)
	}
}

pub(crate) fn depth_exceeded(max_depth: usize, depth: usize) -> bool {
	max_depth != 0 && depth > max_depth
}
