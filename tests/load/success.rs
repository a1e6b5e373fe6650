use load_package::load ;

use crate::fixture_loader::FixtureLoader ;

#[test]
fn load_package_with_main_module() {

	let loader = FixtureLoader::new();

	let package = load( &loader, "example.com/app/server", &fixture_dir!() )
		.expect( "Failed to load package" );

	assert_eq!( package.name(), "server" );
	assert_eq!( package.path(), "example.com/app/server" );
	assert!( package.errors().is_empty() );
	assert_eq!( package.module().map(| module | module.path() ), Some( "example.com/app" ));
	assert_eq!( loader.calls(), 1 );

}

#[test]
fn load_package_from_dependency_module() {

	let loader = FixtureLoader::new();

	let package = load( &loader, "golang.org/x/text/unicode/norm", &fixture_dir!() )
		.expect( "Failed to load package" );

	assert_eq!( package.name(), "norm" );
	assert_eq!( package.module().and_then(| module | module.version() ), Some( "v0.14.0" ));

}

#[test]
fn load_package_without_module() {

	let loader = FixtureLoader::new();

	let package = load( &loader, "./internal/util", &fixture_dir!() )
		.expect( "Failed to load package" );

	assert_eq!( package.id(), "example.com/app/internal/util" );
	assert!( package.module().is_none() );

}

#[test]
fn load_passes_config_through() {

	let loader = FixtureLoader::new();
	let config = fixture_dir!();

	load( &loader, "./internal/util", &config ).expect( "Failed to load package" );

	assert_eq!( loader.last_config(), Some( config ));

}

#[test]
fn load_through_loader_reference() {

	let loader = FixtureLoader::new();

	load( &&loader, "./internal/util", &fixture_dir!() ).expect( "Failed to load package" );

	assert_eq!( loader.calls(), 1 );

}
