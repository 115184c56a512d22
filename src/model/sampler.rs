//! Samplers and Y'CbCr conversions.

use super::enums::{
    BorderColor, ChromaLocation, CompareOp, ComponentSwizzle, Filter, SamplerAddressMode,
    SamplerMipmapMode, SamplerReductionMode, SamplerYcbcrModelConversion, SamplerYcbcrRange,
};
use super::flags::SamplerCreateFlags;
use super::format::Format;
use super::handle::SamplerYcbcrConversion;
use crate::codec::Bool32;

vk_struct! {
    pub struct SamplerCreateInfo("VkSamplerCreateInfo", SAMPLER_CREATE_INFO) chain {
        "flags" => flags: SamplerCreateFlags,
        "magFilter" => mag_filter: Filter,
        "minFilter" => min_filter: Filter,
        "mipmapMode" => mipmap_mode: SamplerMipmapMode,
        "addressModeU" => address_mode_u: SamplerAddressMode,
        "addressModeV" => address_mode_v: SamplerAddressMode,
        "addressModeW" => address_mode_w: SamplerAddressMode,
        "mipLodBias" => mip_lod_bias: f32,
        "anisotropyEnable" => anisotropy_enable: Bool32,
        "maxAnisotropy" => max_anisotropy: f32,
        "compareEnable" => compare_enable: Bool32,
        "compareOp" => compare_op: CompareOp,
        "minLod" => min_lod: f32,
        /// `VK_LOD_CLAMP_NONE` (1000.0) for no clamp
        "maxLod" => max_lod: f32,
        "borderColor" => border_color: BorderColor,
        "unnormalizedCoordinates" => unnormalized_coordinates: Bool32,
    }
}

vk_struct! {
    pub struct SamplerReductionModeCreateInfo("VkSamplerReductionModeCreateInfo", SAMPLER_REDUCTION_MODE_CREATE_INFO) {
        "reductionMode" => reduction_mode: SamplerReductionMode,
    }
}

vk_struct! {
    /// Binds a sampler to a Y'CbCr conversion object
    pub struct SamplerYcbcrConversionInfo("VkSamplerYcbcrConversionInfo", SAMPLER_YCBCR_CONVERSION_INFO) {
        "conversion" => conversion: SamplerYcbcrConversion,
    }
}

vk_struct! {
    pub struct ComponentMapping("VkComponentMapping") {
        "r" => r: ComponentSwizzle,
        "g" => g: ComponentSwizzle,
        "b" => b: ComponentSwizzle,
        "a" => a: ComponentSwizzle,
    }
}

vk_struct! {
    pub struct SamplerYcbcrConversionCreateInfo("VkSamplerYcbcrConversionCreateInfo", SAMPLER_YCBCR_CONVERSION_CREATE_INFO) chain {
        "format" => format: Format,
        "ycbcrModel" => ycbcr_model: SamplerYcbcrModelConversion,
        "ycbcrRange" => ycbcr_range: SamplerYcbcrRange,
        "components" => components: ComponentMapping,
        "xChromaOffset" => x_chroma_offset: ChromaLocation,
        "yChromaOffset" => y_chroma_offset: ChromaLocation,
        "chromaFilter" => chroma_filter: Filter,
        "forceExplicitReconstruction" => force_explicit_reconstruction: Bool32,
    }
}

impl SamplerCreateInfo {
    /// Y'CbCr conversion referenced from the chain, if any
    pub fn ycbcr_conversion(&self) -> Option<SamplerYcbcrConversion> {
        self.next
            .find::<SamplerYcbcrConversionInfo>()
            .map(|info| info.conversion)
            .filter(|conversion| !conversion.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Decoder, Encoder, LOD_CLAMP_NONE};
    use crate::model::chain::Chain;
    use serde_json::json;

    #[test]
    fn test_sampler_special_values() {
        let sampler = SamplerCreateInfo {
            mag_filter: Filter::LINEAR,
            min_filter: Filter::LINEAR,
            mip_lod_bias: f32::NAN,
            max_lod: LOD_CLAMP_NONE,
            compare_op: CompareOp(137),
            ..Default::default()
        };
        let mut enc = Encoder::new();
        let value = enc.encode(&sampler).unwrap();
        assert_eq!(value["mipLodBias"], json!("NaN"));
        assert_eq!(value["maxLod"], json!(1000.0));
        assert_eq!(value["compareOp"], json!(137));
        assert_eq!(
            enc.messages()[0].to_string(),
            "[WARNING] compareOp: Unknown VkCompareOp value 137"
        );

        let mut dec = Decoder::new();
        let decoded: SamplerCreateInfo = dec.decode(&value).unwrap();
        assert!(decoded.mip_lod_bias.is_nan());
        assert_eq!(decoded.max_lod, 1000.0);
        assert_eq!(decoded.compare_op, CompareOp(137));
    }

    #[test]
    fn test_sampler_missing_stype() {
        let err = Decoder::new()
            .decode::<SamplerCreateInfo>(&json!({ "magFilter": "VK_FILTER_LINEAR" }))
            .unwrap_err();
        assert!(err.to_string().contains("Missing sType from JSON"));
    }

    #[test]
    fn test_ycbcr_conversion_lookup() {
        let sampler = SamplerCreateInfo {
            next: Chain::new().with(SamplerYcbcrConversionInfo {
                conversion: SamplerYcbcrConversion::from_raw(0x40),
            }),
            ..Default::default()
        };
        assert_eq!(
            sampler.ycbcr_conversion(),
            Some(SamplerYcbcrConversion::from_raw(0x40))
        );
        assert_eq!(SamplerCreateInfo::default().ycbcr_conversion(), None);
    }
}
