pub struct PipelineSettings {
    pub min_rating: u32,
    pub max_rating: u32,
    pub opening_top_n: usize,
    pub rating_bucket_width: u32,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            min_rating: 0,
            max_rating: 4000,
            opening_top_n: 10,
            rating_bucket_width: 100,
        }
    }
}

pub struct AppConfig {
    pub pipeline: PipelineSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            pipeline: PipelineSettings::default(),
        }
    }
}

// Config is passed explicitly into the services rather than held in a global.
