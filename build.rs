use vergen::EmitBuilder;

fn main() {
    // Outside a git checkout vergen emits placeholder values with a warning,
    // and /api/version falls back to "unknown" through option_env!.
    EmitBuilder::builder()
        .build_timestamp()
        .git_sha(true)
        .emit()
        .expect("Unable to generate build metadata");
}
