fn main() {
    // ESP-IDF environment is only needed for the firmware binary; host
    // builds and tests skip it entirely.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
