/// Builds the instruction sent to the model for `word`. The template is fixed;
/// only the word varies.
pub fn build_prompt(word: &str) -> String {
    format!(
        r#"You are an expert etymologist. Analyze the word "{word}".
Your primary goal is to break it down into its constituent meaningful morphemes (prefixes, roots, suffixes).
For each morpheme, provide:
1. The morpheme itself (e.g., "pre-", "bio", "-logy").
2. Its type (e.g., "prefix", "root", "suffix").
3. Its language of origin (e.g., Latin, Greek, Old English).
4. Its original meaning in that language.

Also, provide a concise overall etymology of the full word "{word}".

Return the response STRICTLY as a JSON object. Do not include any explanatory text, code block markers (```json), or markdown before or after the JSON object itself.
The JSON structure should be:
{{
  "word": "{word}",
  "overall_etymology": "Concise overall summary of the word's origin and evolution.",
  "morphemes": [
    {{
      "morpheme": "string",
      "type": "prefix | root | suffix",
      "origin": "string (e.g., Latin, Greek)",
      "meaning": "string"
    }}
  ]
}}
If the word cannot be meaningfully broken into morphemes (e.g., it's a single root word with no affixes), the "morphemes" array should be empty or contain a single entry representing the whole word as a root.
Focus on common, well-established etymological breakdowns."#
    )
}
