use load_package::{ load, ErrorKind, LoadError, ValidationError };

use crate::fixture_loader::FixtureLoader ;

#[test]
fn load_error_package_errors() {

	let loader = FixtureLoader::new();

	let errors = match load( &loader, "example.com/app/parse", &fixture_dir!() ) {
		Err( LoadError::Validation( ValidationError::Package( errors ))) => errors,
		value => panic!( "Expected Validation( Package ) error, found: {:#?}", value ),
	};

	let kinds = errors.iter().map(| error | error.kind ).collect::<Vec<_>>();
	assert_eq!( kinds, vec![ ErrorKind::Parse, ErrorKind::Type ]);
	assert!( errors.module_error().is_none() );
	assert_eq!(
		errors.to_string(),
		"parse/a.go:3:1: expected declaration, found 'INVALID'\nparse/b.go:10:5: undefined: missingFunc",
	);

}

#[test]
fn load_error_module_error() {

	let loader = FixtureLoader::new();

	match load( &loader, "example.com/broken/module", &fixture_dir!() ) {
		Err( err @ LoadError::Validation( ValidationError::Package( _ ))) => assert_eq!(
			err.to_string(),
			"example.com/broken@v1.2.3: verifying module: checksum mismatch",
		),
		value => panic!( "Expected Validation( Package ) error, found: {:#?}", value ),
	}

}

#[test]
fn load_error_package_and_module_errors() {

	let loader = FixtureLoader::new();

	match load( &loader, "example.com/both", &fixture_dir!() ) {
		Err( LoadError::Validation( ValidationError::Package( errors ))) => {
			assert_eq!( errors.errors().len(), 1 );
			assert_eq!( errors.to_string(), "no Go files in /src/example.com/both\nmissing go.sum entry" );
		},
		value => panic!( "Expected Validation( Package ) error, found: {:#?}", value ),
	}

}
