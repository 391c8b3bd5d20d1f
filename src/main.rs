mod capability;
mod counter;
mod demo;
mod greet;
mod memory;
mod printer;
mod value;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    demo::demonstrate_type_system();
    demo::demonstrate_generics();
    memory::demonstrate_memory_management();

    Ok(())
}
