//! Default try-on generation prompt.

/// Instruction sent to the model when the client doesn't supply its own
/// prompt. Portuguese, matching the product's audience; the negative-prompt
/// section was tuned against real generation artifacts (deformed hands,
/// identity drift, cartoon rendering).
pub const DEFAULT_PROMPT: &str = "Atue como um fotógrafo de moda profissional e editor de imagem. A primeira imagem fornecida é o 'Modelo' (pessoa). A segunda imagem fornecida é a 'Roupa' (peça de vestuário). TAREFA: Gere uma nova imagem fotorrealista de alta qualidade do 'Modelo' vestindo a 'Roupa'. REGRAS: 1. Mantenha as características faciais, tom de pele, tipo de corpo e pose do 'Modelo' o mais fiel possível. 2. Substitua a roupa original do 'Modelo' pela 'Roupa' fornecida. 3. A roupa deve se ajustar naturalmente ao corpo do modelo (caimento realista, dobras, iluminação). 4. Mantenha o fundo original se possível, ou use um fundo de estúdio neutro e elegante se o recorte for difícil. 5. Alta resolução, nítido, estilo Shein/Fashion Nova. PROMPT NEGATIVO: Evite: distorções faciais, mudança de identidade do modelo, rosto diferente, olhos desalinhados, boca torta, pele artificial, tom de pele alterado, corpo deformado, proporções irreais, membros extras, braços ou pernas faltando, mãos deformadas, dedos extras, dedos fundidos, mãos borradas, pose diferente da original, expressão facial alterada, roupa mal encaixada, roupa flutuando, roupa colada artificialmente, textura de tecido irreal, dobras incorretas, costuras erradas, sombras inconsistentes, iluminação irreal, reflexos estranhos, baixa resolução, imagem borrada, pixelização, ruído excessivo, arte digital, estilo cartoon, anime, ilustração, pintura, CGI, 3D render, aparência plástica, efeito boneca, fundo bagunçado, fundo distorcido, recortes visíveis, bordas serrilhadas, marcas d'água, textos, logotipos, branding, distorções de perspectiva.";
