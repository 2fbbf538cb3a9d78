// This file is an example of how to use the `sign_vision` library.
// The main library entry point is `src/lib.rs`.

fn main() {
    println!("Sign Vision Engine - Example Runner");
    // In a real application, you would create a config, instantiate the
    // pipeline, and process hand landmarks from a tracking provider here.
    //
    // Example:
    // let config = sign_vision::pipeline::PipelineConfig::default();
    // let mut pipeline = RecognitionPipeline::new(config);
    // pipeline.start_recording();
    // let hand = hand_from_tracking_provider();
    // let report = pipeline.process_frame(&hand);
    // println!("Report: {:?}", report);
}
