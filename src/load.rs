use itertools::Itertools ;
use pipe_trait::Pipe ;
use thiserror::Error ;

use crate::{ InvalidPattern, Package, PackageLoader, ValidationError, validate, validate_pattern };



/// Errors that can occur when loading a single package through [`load`].
///
/// `E` is the loader's own [`PackageLoader::Error`].
#[derive( Error, Debug )]
pub enum LoadError<E> {
	/// The pattern could match more than one package; the loader was not invoked.
	#[error( transparent )] InvalidPattern( #[from] InvalidPattern ),
	/// The loader failed; its error is passed through as-is.
	#[error( transparent )] Loader( E ),
	/// The loader returned some other number of packages than one.
	#[error( "expected exactly one package, found {0}" )] WrongResultCount( usize ),
	/// The package was returned but carries errors.
	#[error( transparent )] Validation( #[from] ValidationError ),
}

/// Loads the single package named by `pattern`.
///
/// The pattern is checked with [`validate_pattern`] first, so reserved names and
/// wildcards never reach the loader. `config` is handed to the loader unchanged.
/// The loader must produce exactly one package, which is then checked with [`validate`].
///
/// # Errors
/// - [`LoadError::InvalidPattern`] if the pattern is reserved or contains a wildcard
/// - [`LoadError::Loader`] if the loader fails
/// - [`LoadError::WrongResultCount`] if the loader returns zero or several packages
/// - [`LoadError::Validation`] if the package or its module carries errors
pub fn load<L: PackageLoader>(
	loader: &L,
	pattern: &str,
	config: &L::Config,
) -> Result<Package, LoadError<L::Error>> {

	validate_pattern( pattern )?;

	tracing::debug!( pattern, "loading package" );

	let package = loader
		.load( config, &[ pattern ])
		.map_err( LoadError::Loader )?
		.pipe( exactly_one::<L::Error> )?;

	validate( Some( &package ))?;
	Ok( package )

}

fn exactly_one<E>( packages: Vec<Package> ) -> Result<Package, LoadError<E>> {
	packages.into_iter().exactly_one().map_err(| rest | {
		let count = rest.count();
		tracing::trace!( count, "loader returned wrong number of packages" );
		LoadError::WrongResultCount( count )
	})
}
