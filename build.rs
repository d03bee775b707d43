fn main() {
    // ESP-IDF environment (linker args, sysroot) is only needed when
    // building for the target.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
