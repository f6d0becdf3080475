/// Builds the question-answering prompt sent to the model.
pub fn build_prompt(document_text: &str, question: &str) -> String {
    format!(
        "PDF Content: {document_text}

User Question: {question}

Instructions:
1. Carefully analyze the PDF content provided above.
2. Focus on answering the user's question accurately and comprehensively.
3. If the answer is directly stated in the PDF, quote the relevant part.
4. If the answer requires interpretation, explain your reasoning clearly.
5. If the PDF doesn't contain enough information to answer the question, state this clearly.
6. Provide context and additional information when relevant.
7. Keep your response concise but informative.
8. If appropriate, suggest follow-up questions the user might find helpful.

Please provide your response based on these instructions:
"
    )
}
