use thiserror::Error ;

use crate::{ Package, PackageErrors };



/// Errors found when inspecting a loaded [`Package`].
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum ValidationError {
	/// There was no package to inspect.
	#[error( "package is nil" )] NilPackage,
	/// The package or its module carried errors.
	#[error( transparent )] Package( #[from] PackageErrors ),
}

/// Checks a loaded package for embedded load, compile or module errors.
///
/// A package is valid when its error list is empty and it either has no module or its
/// module resolved without error.
///
/// # Errors
/// [`ValidationError::NilPackage`] for `None`, otherwise [`ValidationError::Package`]
/// holding a copy of every error found.
pub fn validate( package: Option<&Package> ) -> Result<(), ValidationError> {

	let package = package.ok_or( ValidationError::NilPackage )?;
	let module_error = package.module().and_then(| module | module.error() );

	if package.errors().is_empty() && module_error.is_none() { return Ok(()) }

	tracing::debug!(
		package = package.path(),
		errors = package.errors().len(),
		module_error = module_error.is_some(),
		"package failed validation"
	);

	Err( PackageErrors::new( package.errors().to_vec(), module_error.cloned() ).into() )

}
