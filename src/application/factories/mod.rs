mod example_factory;

pub use example_factory::ExampleFactory;
