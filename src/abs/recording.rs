//! A [`GraphicsApi`] that records calls instead of talking to a driver.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::num::NonZeroU32;

use super::{BufferId, BufferTarget, GraphicsApi, VertexArrayId};

#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateVertexArray(VertexArrayId),
    BindVertexArray(Option<VertexArrayId>),
    DeleteVertexArray(VertexArrayId),
    CreateBuffer(BufferId),
    BindBuffer(BufferTarget, Option<BufferId>),
    BufferData(BufferTarget, Vec<u8>),
    DeleteBuffer(BufferId),
    VertexAttribPointer { index: u32, size: i32, normalized: bool, stride: i32, offset: i32 },
    EnableVertexAttribArray(u32),
    DisableVertexAttribArray(u32),
    ClearColor([f32; 4]),
    Clear(u32),
    DrawElements { mode: u32, count: i32, element_type: u32, offset: i32 },
    DrawArrays { mode: u32, first: i32, count: i32 },
}

#[derive(Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_id: Cell<u32>,
    bound_vertex_array: Cell<Option<VertexArrayId>>,
    enabled_attribs: RefCell<BTreeSet<u32>>,
    fail_next_vertex_array: Cell<bool>,
    fail_buffer_after: Cell<Option<usize>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn bound_vertex_array(&self) -> Option<VertexArrayId> {
        self.bound_vertex_array.get()
    }

    pub fn is_attrib_enabled(&self, index: u32) -> bool {
        self.enabled_attribs.borrow().contains(&index)
    }

    pub fn fail_next_vertex_array(&self) {
        self.fail_next_vertex_array.set(true);
    }

    pub fn fail_next_buffer(&self) {
        self.fail_buffer_after(0);
    }

    /// Lets `successes` more buffer allocations through, then fails the one after.
    pub fn fail_buffer_after(&self, successes: usize) {
        self.fail_buffer_after.set(Some(successes));
    }

    pub fn deleted_vertex_arrays(&self) -> Vec<VertexArrayId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GlCall::DeleteVertexArray(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn deleted_buffers(&self) -> Vec<BufferId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                GlCall::DeleteBuffer(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn next_name(&self) -> NonZeroU32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        NonZeroU32::new(id).unwrap()
    }
}

impl GraphicsApi for RecordingGl {
    fn create_vertex_array(&self) -> Result<VertexArrayId, String> {
        if self.fail_next_vertex_array.replace(false) {
            return Err("out of vertex arrays".to_string());
        }
        let id = VertexArrayId(self.next_name());
        self.push(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<VertexArrayId>) {
        self.bound_vertex_array.set(vertex_array);
        self.push(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: VertexArrayId) {
        self.push(GlCall::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<BufferId, String> {
        match self.fail_buffer_after.get() {
            Some(0) => {
                self.fail_buffer_after.set(None);
                return Err("out of buffers".to_string());
            }
            Some(remaining) => self.fail_buffer_after.set(Some(remaining - 1)),
            None => {}
        }
        let id = BufferId(self.next_name());
        self.push(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<BufferId>) {
        self.push(GlCall::BindBuffer(target, buffer));
    }

    fn buffer_data(&self, target: BufferTarget, data: &[u8]) {
        self.push(GlCall::BufferData(target, data.to_vec()));
    }

    fn delete_buffer(&self, buffer: BufferId) {
        self.push(GlCall::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, normalized: bool, stride: i32, offset: i32) {
        self.push(GlCall::VertexAttribPointer { index, size, normalized, stride, offset });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.enabled_attribs.borrow_mut().insert(index);
        self.push(GlCall::EnableVertexAttribArray(index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.enabled_attribs.borrow_mut().remove(&index);
        self.push(GlCall::DisableVertexAttribArray(index));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.push(GlCall::ClearColor([red, green, blue, alpha]));
    }

    fn clear(&self, mask: u32) {
        self.push(GlCall::Clear(mask));
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.push(GlCall::DrawElements { mode, count, element_type, offset });
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.push(GlCall::DrawArrays { mode, first, count });
    }
}
