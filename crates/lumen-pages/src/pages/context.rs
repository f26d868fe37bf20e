/// Everything one page owns: the input-driven `state` and the GPU
/// `resources` built once the device exists.
///
/// Passed by `&mut` into every callback.
pub struct AppContext<S, R> {
    pub state: S,
    resources: Option<R>,
}

impl<S, R> AppContext<S, R> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            resources: None,
        }
    }

    /// Stores the resources built in `on_gpu_ready`.
    pub fn install(&mut self, resources: R) {
        if self.resources.is_some() {
            log::warn!("page resources rebuilt");
        }
        self.resources = Some(resources);
    }

    /// Split borrow of state and resources; `None` before setup finished.
    pub fn parts(&mut self) -> Option<(&mut S, &mut R)> {
        let resources = self.resources.as_mut()?;
        Some((&mut self.state, resources))
    }
}
