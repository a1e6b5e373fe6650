//! Package descriptor types.
//!
//! A [`Package`] is what a [`PackageLoader`]( crate::PackageLoader ) resolves a pattern into.
//! Loaders report problems by attaching them to the descriptor rather than failing the
//! whole load: per-package problems go into [`Package::errors`], and a failure to resolve
//! the enclosing [`Module`] is recorded on the module itself.

use thiserror::Error ;



/// One resolved unit of source code.
#[derive( Debug, Clone, PartialEq, Eq, Default )]
pub struct Package {
	/// Loader-specific unique identifier
	id: String,
	/// Package name as declared in source
	name: String,
	/// Import path the package is reachable under
	path: String,
	/// Load and compile errors, in the order the loader reported them
	errors: Vec<PackageError>,
	/// Dependency module the package belongs to, if any
	module: Option<Module>,
}

impl Package {
	/// Creates a package descriptor with no errors and no module.
	#[inline]
	pub fn new(
		id: impl Into<String>,
		name: impl Into<String>,
		path: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			path: path.into(),
			errors: Vec::with_capacity( 0 ),
			module: None,
		}
	}

	/// Replaces the error list.
	pub fn with_errors( mut self, errors: impl IntoIterator<Item = PackageError> ) -> Self {
		self.errors = errors.into_iter().collect();
		self
	}

	/// Attaches the module the package belongs to.
	pub fn with_module( mut self, module: Module ) -> Self {
		self.module = Some( module );
		self
	}

	/// Loader-specific unique identifier.
	#[inline] pub fn id( &self ) -> &str { &self.id }

	/// Package name as declared in source.
	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// Import path the package is reachable under.
	#[inline] pub fn path( &self ) -> &str { &self.path }

	/// Load and compile errors.
	#[inline] pub fn errors( &self ) -> &[PackageError] { &self.errors }

	/// Dependency module the package belongs to.
	#[inline] pub fn module( &self ) -> Option<&Module> { self.module.as_ref() }
}

/// The dependency-management unit a [`Package`] was resolved in.
#[derive( Debug, Clone, PartialEq, Eq, Default )]
pub struct Module {
	path: String,
	version: Option<String>,
	error: Option<ModuleError>,
}

impl Module {
	#[inline]
	pub fn new( path: impl Into<String> ) -> Self {
		Self { path: path.into(), version: None, error: None }
	}

	pub fn with_version( mut self, version: impl Into<String> ) -> Self {
		self.version = Some( version.into() );
		self
	}

	/// Records that the module itself failed to resolve.
	pub fn with_error( mut self, error: ModuleError ) -> Self {
		self.error = Some( error );
		self
	}

	/// Module path (e.g., "example.com/lib").
	#[inline] pub fn path( &self ) -> &str { &self.path }

	/// Resolved version, absent for the main module.
	#[inline] pub fn version( &self ) -> Option<&str> { self.version.as_deref() }

	/// Error encountered while resolving the module.
	#[inline] pub fn error( &self ) -> Option<&ModuleError> { self.error.as_ref() }
}

/// Which stage of loading produced a [`PackageError`].
#[derive( Copy, Clone, Eq, PartialEq, Hash, Debug, Default )]
pub enum ErrorKind {
	#[default] Unknown,
	/// Failure while listing or resolving the package.
	List,
	/// Failure while parsing a source file.
	Parse,
	/// Failure while type-checking the package.
	Type,
}

/// A single load or compile error attached to a [`Package`].
///
/// Displays as `pos: msg`, or as just `msg` when the position is unknown.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct PackageError {
	/// `file:line:col`, `file:line`, `file` or empty
	pub pos: String,
	pub msg: String,
	pub kind: ErrorKind,
}

impl PackageError {
	#[inline]
	pub fn new( pos: impl Into<String>, msg: impl Into<String>, kind: ErrorKind ) -> Self {
		Self { pos: pos.into(), msg: msg.into(), kind }
	}
}

impl std::fmt::Display for PackageError {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		match self.pos.is_empty() {
			true => f.write_str( &self.msg ),
			false => write!( f, "{}: {}", self.pos, self.msg ),
		}
	}
}

impl std::error::Error for PackageError {}

/// A failure to resolve the [`Module`] a package belongs to.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
#[error( "{err}" )]
pub struct ModuleError {
	pub err: String,
}

impl ModuleError {
	#[inline]
	pub fn new( err: impl Into<String> ) -> Self { Self { err: err.into() } }
}
