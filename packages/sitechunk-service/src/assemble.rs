use sitechunk_domain::{PageRecord, TeamMember, TopicRow};

/// Grand token total of a scrape: pages, then standalone team members, then topic rows.
///
/// Topic rows contribute [`TopicRow::token_count`], so rows without a numeric `tokens` value
/// add nothing.
pub fn total_tokens(
	pages: &[PageRecord],
	team_members: Option<&[TeamMember]>,
	topics: Option<&[TopicRow]>,
) -> usize {
	let pages = pages.iter().map(|page| page.tokens).sum::<usize>();
	let team = team_members.unwrap_or_default().iter().map(|member| member.tokens).sum::<usize>();
	let topics = topics.unwrap_or_default().iter().map(TopicRow::token_count).sum::<usize>();

	pages + team + topics
}
