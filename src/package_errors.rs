use itertools::Itertools ;

use crate::{ ModuleError, PackageError };



/// Every error a loaded package carried, reported as a single value.
///
/// Only built by [`validate`]( crate::validate ) when there is at least one error to report,
/// either on the package itself or on its module.
///
/// The [`Display`]( std::fmt::Display ) form lists each package error on its own line,
/// followed by the module error if there is one. Iterating yields the package errors
/// only; the module error is reachable through [`PackageErrors::module_error`].
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct PackageErrors {
	errors: Vec<PackageError>,
	module_error: Option<ModuleError>,
}

impl PackageErrors {

	pub(crate) fn new( errors: Vec<PackageError>, module_error: Option<ModuleError> ) -> Self {
		debug_assert!( !errors.is_empty() || module_error.is_some(), "no errors to aggregate" );
		Self { errors, module_error }
	}

	/// Package errors in the order the loader reported them.
	#[inline] pub fn errors( &self ) -> &[PackageError] { &self.errors }

	/// Error from resolving the package's module.
	#[inline] pub fn module_error( &self ) -> Option<&ModuleError> { self.module_error.as_ref() }

	#[inline] pub fn iter( &self ) -> std::slice::Iter<'_, PackageError> { self.errors.iter() }

	/// Takes the package errors, dropping the module error.
	pub fn into_errors( self ) -> Vec<PackageError> { self.errors }
}

impl std::fmt::Display for PackageErrors {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}", self.errors.iter().format( "\n" ))?;
		if let Some( module_error ) = &self.module_error {
			if !self.errors.is_empty() { f.write_str( "\n" )?; }
			write!( f, "{}", module_error )?;
		}
		Ok(())
	}
}

impl std::error::Error for PackageErrors {
	fn source( &self ) -> Option<&( dyn std::error::Error + 'static )> {
		self.errors.first().map(| err | err as &( dyn std::error::Error + 'static ))
	}
}

impl IntoIterator for PackageErrors {
	type Item = PackageError ;
	type IntoIter = std::vec::IntoIter<PackageError> ;
	fn into_iter( self ) -> Self::IntoIter { self.errors.into_iter() }
}

impl<'a> IntoIterator for &'a PackageErrors {
	type Item = &'a PackageError ;
	type IntoIter = std::slice::Iter<'a, PackageError> ;
	fn into_iter( self ) -> Self::IntoIter { self.errors.iter() }
}
