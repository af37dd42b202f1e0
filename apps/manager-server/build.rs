fn main() {
    shadow_rs::ShadowBuilder::builder()
        .build()
        .expect("Failed generating build information");
}
