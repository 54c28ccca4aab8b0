fn main() {
    // Emit ESP-IDF link/search metadata when building for the device.
    // On host targets the espidf feature (and embuild) is absent and this
    // build script is a no-op.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
