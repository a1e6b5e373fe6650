use crate::Package ;



/// The facility that actually resolves patterns into [`Package`]s.
///
/// Implementations own everything about discovery: resolving import paths, reading
/// build metadata, parsing sources. Problems specific to one package should be reported
/// through [`Package::errors`] or the package's [`Module`]( crate::Module ) rather than
/// through `Err`, which is reserved for the load as a whole failing.
pub trait PackageLoader {
	/// Settings forwarded untouched to every [`load`]( PackageLoader::load ) call.
	type Config ;
	/// Failure of the load as a whole.
	type Error: std::error::Error + 'static ;

	/// Resolves `patterns` into packages, in the order the loader chooses.
	///
	/// # Errors
	/// Whenever the loader cannot produce a result at all.
	fn load( &self, config: &Self::Config, patterns: &[&str] ) -> Result<Vec<Package>, Self::Error> ;
}

impl<L: PackageLoader + ?Sized> PackageLoader for &L {
	type Config = L::Config ;
	type Error = L::Error ;

	#[inline]
	fn load( &self, config: &Self::Config, patterns: &[&str] ) -> Result<Vec<Package>, Self::Error> {
		( **self ).load( config, patterns )
	}
}
