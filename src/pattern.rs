use thiserror::Error ;



/// Patterns that name a whole set of packages rather than a single one.
///
/// Matched exactly and case-sensitively, both bare and in their `pattern=` form.
pub const RESERVED_PATTERNS: [&str; 10] = [
	"main", "pattern=main",
	"all", "pattern=all",
	"std", "pattern=std",
	"cmd", "pattern=cmd",
	"tool", "pattern=tool",
];

/// Marker that turns a pattern into a wildcard matching any number of packages.
pub const WILDCARD: &str = "..." ;

/// Errors produced when a pattern could resolve to more than one package.
///
/// Detected before the loader is invoked.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum InvalidPattern {
	/// The pattern is one of [`RESERVED_PATTERNS`].
	#[error( "pattern cannot be a reserved name: {0}" )] ReservedName( String ),
	/// The pattern contains [`WILDCARD`].
	#[error( "pattern cannot contain wildcards: {0}" )] Wildcard( String ),
}

/// Checks that `pattern` can only ever name a single package.
///
/// Only the forms listed in [`RESERVED_PATTERNS`] and [`WILDCARD`] are rejected; anything
/// else in the loader's own pattern grammar is left for the loader to judge.
///
/// # Errors
/// [`InvalidPattern::ReservedName`] for a reserved name, otherwise
/// [`InvalidPattern::Wildcard`] if the pattern contains `...`.
pub fn validate_pattern( pattern: &str ) -> Result<(), InvalidPattern> {
	if RESERVED_PATTERNS.contains( &pattern ) {
		return Err( InvalidPattern::ReservedName( pattern.to_string() ));
	}
	if pattern.contains( WILDCARD ) {
		return Err( InvalidPattern::Wildcard( pattern.to_string() ));
	}
	Ok(())
}
