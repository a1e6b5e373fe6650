//! Loads a single source package by pattern and reports everything wrong with it as
//! one error value.
//!
//! The actual package discovery is left to a [`PackageLoader`] you provide. This crate
//! sits on top of it and makes sure that a load asked for one package gets exactly one
//! package, and that the package is usable.
//!
//! # Core Concepts
//!
//! - **Pattern**: a string naming a unit of source code, such as an import path. Patterns
//! 	that name a set of packages are rejected up front: the reserved names in
//! 	[`RESERVED_PATTERNS`] and anything containing the [`WILDCARD`] `...`.
//!
//! - [`Package`]: the descriptor a loader resolves a pattern into. Loaders attach
//! 	per-package problems to [`Package::errors`] and module resolution failures to the
//! 	package's [`Module`].
//!
//! - [`PackageErrors`]: every error found on a package, combined. Its `Display` form lists
//! 	them one per line; iterating it yields the individual [`PackageError`]s.
//!
//! # Example
//!
//! ```
//! use load_package::{ load, LoadError, Module, ModuleError, Package, PackageLoader };
//!
//! // A loader that knows a fixed set of packages.
//! struct Catalogue( Vec<Package> );
//!
//! #[derive( Debug, thiserror::Error )]
//! #[error( "catalogue unavailable" )]
//! struct Unavailable ;
//!
//! impl PackageLoader for Catalogue {
//! 	type Config = ();
//! 	type Error = Unavailable ;
//!
//! 	fn load( &self, _config: &(), patterns: &[&str] ) -> Result<Vec<Package>, Unavailable> {
//! 		Ok( self.0.iter()
//! 			.filter(| package | patterns.contains( &package.path() ))
//! 			.cloned()
//! 			.collect())
//! 	}
//! }
//!
//! let catalogue = Catalogue( vec![
//! 	Package::new( "good", "good", "example.com/good" ),
//! 	Package::new( "broken", "broken", "example.com/broken" )
//! 		.with_module( Module::new( "example.com" ).with_error( ModuleError::new( "checksum mismatch" ))),
//! ]);
//!
//! let package = load( &catalogue, "example.com/good", &() ).expect( "package should load" );
//! assert_eq!( package.name(), "good" );
//!
//! match load( &catalogue, "example.com/broken", &() ) {
//! 	Err( err @ LoadError::Validation( _ )) => assert_eq!( err.to_string(), "checksum mismatch" ),
//! 	other => panic!( "unexpected result: {:?}", other ),
//! }
//!
//! assert!( matches!( load( &catalogue, "example.com/...", &() ), Err( LoadError::InvalidPattern( _ ))));
//! assert!( matches!( load( &catalogue, "example.com/missing", &() ), Err( LoadError::WrongResultCount( 0 ))));
//! ```
//!
//! # Logging
//!
//! Events are emitted through [`tracing`](https://docs.rs/tracing) at `debug` and `trace`
//! level. No subscriber is installed; errors are always returned, never only logged.

mod load ;
mod loader ;
mod package ;
mod package_errors ;
mod pattern ;
mod validate ;

pub use load::{ load, LoadError };
pub use loader::PackageLoader ;
pub use package::{ Package, Module, PackageError, ModuleError, ErrorKind };
pub use package_errors::PackageErrors ;
pub use pattern::{ validate_pattern, InvalidPattern, RESERVED_PATTERNS, WILDCARD };
pub use validate::{ validate, ValidationError };
