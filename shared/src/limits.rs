pub struct Limits {
    // Post composer limits
    pub max_post_length: usize,
}

pub static LIMITS: Limits = Limits {
    max_post_length: 20,
};
