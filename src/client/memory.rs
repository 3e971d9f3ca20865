use super::{ApiRequest, BaseClient, Query};
use crate::error::Result;
use crate::models::memory::OneOrMany;
use crate::models::{
    BulkIdsDto, MemoryCreateDto, MemoryResponseDto, MemorySearchParams,
    MemoryStatisticsResponseDto, MemoryUpdateDto,
};

/// "On this day" memories.
///
/// Some server versions answer search and asset changes with a single
/// memory instead of a list; both shapes are accepted and returned as a
/// list.
pub struct MemoriesClient<'a> {
    base: &'a BaseClient,
}

impl<'a> MemoriesClient<'a> {
    pub fn new(base: &'a BaseClient) -> Self {
        Self { base }
    }

    pub fn search(&self, params: &MemorySearchParams) -> Result<Vec<MemoryResponseDto>> {
        let request = ApiRequest::get("/api/memories").query(search_query(params));
        let memories: OneOrMany<MemoryResponseDto> = self.base.fetch(&request)?;
        Ok(memories.into_vec())
    }

    pub fn create(&self, dto: &MemoryCreateDto) -> Result<MemoryResponseDto> {
        self.base.fetch(&ApiRequest::post("/api/memories").json(dto)?)
    }

    pub fn get(&self, memory_id: &str) -> Result<MemoryResponseDto> {
        self.base
            .fetch(&ApiRequest::get(format!("/api/memories/{memory_id}")))
    }

    pub fn update(&self, memory_id: &str, dto: &MemoryUpdateDto) -> Result<MemoryResponseDto> {
        self.base
            .fetch(&ApiRequest::put(format!("/api/memories/{memory_id}")).json(dto)?)
    }

    pub fn delete(&self, memory_id: &str) -> Result<()> {
        self.base
            .send(&ApiRequest::delete(format!("/api/memories/{memory_id}")))
    }

    pub fn add_assets(&self, memory_id: &str, dto: &BulkIdsDto) -> Result<Vec<MemoryResponseDto>> {
        let request = ApiRequest::put(format!("/api/memories/{memory_id}/assets")).json(dto)?;
        let memories: OneOrMany<MemoryResponseDto> = self.base.fetch(&request)?;
        Ok(memories.into_vec())
    }

    pub fn remove_assets(
        &self,
        memory_id: &str,
        dto: &BulkIdsDto,
    ) -> Result<Vec<MemoryResponseDto>> {
        let request = ApiRequest::delete(format!("/api/memories/{memory_id}/assets")).json(dto)?;
        let memories: OneOrMany<MemoryResponseDto> = self.base.fetch(&request)?;
        Ok(memories.into_vec())
    }

    /// Number of memories matching the same filters as [`search`](Self::search).
    pub fn statistics(&self, params: &MemorySearchParams) -> Result<MemoryStatisticsResponseDto> {
        self.base
            .fetch(&ApiRequest::get("/api/memories/statistics").query(search_query(params)))
    }
}

fn search_query(params: &MemorySearchParams) -> Query {
    Query::new()
        .push_opt("for", params.for_date.as_deref())
        .push_opt("isSaved", params.is_saved)
        .push_opt("isTrashed", params.is_trashed)
        .push_opt("order", params.order)
        .push_opt("size", params.size)
        .push_opt("type", params.memory_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MemorySearchOrder, MemoryType};

    #[test]
    fn search_query_uses_wire_names() {
        let params = MemorySearchParams {
            for_date: Some("2024-06-01".into()),
            order: Some(MemorySearchOrder::Random),
            memory_type: Some(MemoryType::OnThisDay),
            size: Some(5),
            ..Default::default()
        };
        let query = search_query(&params);
        let keys: Vec<&str> = query.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["for", "order", "size", "type"]);
        assert_eq!(query.pairs()[1].1, "random");
        assert_eq!(query.pairs()[3].1, "on_this_day");
    }

    #[test]
    fn single_memory_is_wrapped_in_a_list() {
        let one: OneOrMany<u32> = serde_json::from_str("7").unwrap();
        assert_eq!(one.into_vec(), vec![7]);
        let many: OneOrMany<u32> = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(many.into_vec(), vec![1, 2]);
    }
}
