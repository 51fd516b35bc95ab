#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub detections_dir: String,
    pub ground_truth_dir: String,
    pub images_dir: String,
    pub iou_threshold: f64,
    pub scale_factor: f64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            detections_dir: String::new(),
            ground_truth_dir: String::new(),
            images_dir: String::new(),
            iou_threshold: 0.5,
            scale_factor: 1.0,
        }
    }
}

impl EvalConfig {
    pub fn new(detections_dir: String, ground_truth_dir: String, images_dir: String,
               iou_threshold: f64, scale_factor: f64) -> Self {
        Self {
            detections_dir,
            ground_truth_dir,
            images_dir,
            iou_threshold,
            scale_factor,
        }
    }

    pub fn to_string(&self) -> String {
        format!("Detections Path: {}\n\
        Ground Truth Path: {}\n\
        Images Path: {}\n\
        IoU Threshold: {}\n\
        Box Area Scale Factor: {}",
                self.detections_dir, self.ground_truth_dir, self.images_dir,
                self.iou_threshold, self.scale_factor)
    }
}
