vk_enum! {
    /// Image formats that can appear in attachment descriptions and
    /// Y'CbCr conversions
    pub struct Format("VkFormat") {
        UNDEFINED = 0 => "VK_FORMAT_UNDEFINED",
        R4G4_UNORM_PACK8 = 1 => "VK_FORMAT_R4G4_UNORM_PACK8",
        R5G6B5_UNORM_PACK16 = 4 => "VK_FORMAT_R5G6B5_UNORM_PACK16",
        R8_UNORM = 9 => "VK_FORMAT_R8_UNORM",
        R8_SNORM = 10 => "VK_FORMAT_R8_SNORM",
        R8_UINT = 13 => "VK_FORMAT_R8_UINT",
        R8_SINT = 14 => "VK_FORMAT_R8_SINT",
        R8_SRGB = 15 => "VK_FORMAT_R8_SRGB",
        R8G8_UNORM = 16 => "VK_FORMAT_R8G8_UNORM",
        R8G8_UINT = 20 => "VK_FORMAT_R8G8_UINT",
        R8G8B8_UNORM = 23 => "VK_FORMAT_R8G8B8_UNORM",
        R8G8B8A8_UNORM = 37 => "VK_FORMAT_R8G8B8A8_UNORM",
        R8G8B8A8_SNORM = 38 => "VK_FORMAT_R8G8B8A8_SNORM",
        R8G8B8A8_UINT = 41 => "VK_FORMAT_R8G8B8A8_UINT",
        R8G8B8A8_SINT = 42 => "VK_FORMAT_R8G8B8A8_SINT",
        R8G8B8A8_SRGB = 43 => "VK_FORMAT_R8G8B8A8_SRGB",
        B8G8R8A8_UNORM = 44 => "VK_FORMAT_B8G8R8A8_UNORM",
        B8G8R8A8_SRGB = 50 => "VK_FORMAT_B8G8R8A8_SRGB",
        A2B10G10R10_UNORM_PACK32 = 64 => "VK_FORMAT_A2B10G10R10_UNORM_PACK32",
        R16_UNORM = 70 => "VK_FORMAT_R16_UNORM",
        R16_UINT = 74 => "VK_FORMAT_R16_UINT",
        R16_SFLOAT = 76 => "VK_FORMAT_R16_SFLOAT",
        R16G16_SFLOAT = 83 => "VK_FORMAT_R16G16_SFLOAT",
        R16G16B16A16_UNORM = 91 => "VK_FORMAT_R16G16B16A16_UNORM",
        R16G16B16A16_SFLOAT = 97 => "VK_FORMAT_R16G16B16A16_SFLOAT",
        R32_UINT = 98 => "VK_FORMAT_R32_UINT",
        R32_SINT = 99 => "VK_FORMAT_R32_SINT",
        R32_SFLOAT = 100 => "VK_FORMAT_R32_SFLOAT",
        R32G32_UINT = 101 => "VK_FORMAT_R32G32_UINT",
        R32G32_SFLOAT = 103 => "VK_FORMAT_R32G32_SFLOAT",
        R32G32B32_UINT = 104 => "VK_FORMAT_R32G32B32_UINT",
        R32G32B32_SFLOAT = 106 => "VK_FORMAT_R32G32B32_SFLOAT",
        R32G32B32A32_UINT = 107 => "VK_FORMAT_R32G32B32A32_UINT",
        R32G32B32A32_SINT = 108 => "VK_FORMAT_R32G32B32A32_SINT",
        R32G32B32A32_SFLOAT = 109 => "VK_FORMAT_R32G32B32A32_SFLOAT",
        B10G11R11_UFLOAT_PACK32 = 122 => "VK_FORMAT_B10G11R11_UFLOAT_PACK32",
        D16_UNORM = 124 => "VK_FORMAT_D16_UNORM",
        X8_D24_UNORM_PACK32 = 125 => "VK_FORMAT_X8_D24_UNORM_PACK32",
        D32_SFLOAT = 126 => "VK_FORMAT_D32_SFLOAT",
        S8_UINT = 127 => "VK_FORMAT_S8_UINT",
        D16_UNORM_S8_UINT = 128 => "VK_FORMAT_D16_UNORM_S8_UINT",
        D24_UNORM_S8_UINT = 129 => "VK_FORMAT_D24_UNORM_S8_UINT",
        D32_SFLOAT_S8_UINT = 130 => "VK_FORMAT_D32_SFLOAT_S8_UINT",
        BC1_RGB_UNORM_BLOCK = 131 => "VK_FORMAT_BC1_RGB_UNORM_BLOCK",
        ETC2_R8G8B8_UNORM_BLOCK = 147 => "VK_FORMAT_ETC2_R8G8B8_UNORM_BLOCK",
        ASTC_4X4_UNORM_BLOCK = 157 => "VK_FORMAT_ASTC_4x4_UNORM_BLOCK",
        G8B8G8R8_422_UNORM = 1000156000 => "VK_FORMAT_G8B8G8R8_422_UNORM",
        B8G8R8G8_422_UNORM = 1000156001 => "VK_FORMAT_B8G8R8G8_422_UNORM",
        G8_B8_R8_3PLANE_420_UNORM = 1000156002 => "VK_FORMAT_G8_B8_R8_3PLANE_420_UNORM",
        G8_B8R8_2PLANE_420_UNORM = 1000156003 => "VK_FORMAT_G8_B8R8_2PLANE_420_UNORM",
        G8_B8_R8_3PLANE_422_UNORM = 1000156004 => "VK_FORMAT_G8_B8_R8_3PLANE_422_UNORM",
        G8_B8R8_2PLANE_422_UNORM = 1000156005 => "VK_FORMAT_G8_B8R8_2PLANE_422_UNORM",
        G8_B8_R8_3PLANE_444_UNORM = 1000156006 => "VK_FORMAT_G8_B8_R8_3PLANE_444_UNORM",
        G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16 = 1000156013 => "VK_FORMAT_G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16",
        G16_B16R16_2PLANE_420_UNORM = 1000156030 => "VK_FORMAT_G16_B16R16_2PLANE_420_UNORM",
    }
}

impl Format {
    /// Multi-planar or subsampled Y'CbCr format
    pub fn is_ycbcr(self) -> bool {
        (1000156000..=1000156033).contains(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!(Format::R8G8B8A8_UNORM.name(), Some("VK_FORMAT_R8G8B8A8_UNORM"));
        assert_eq!(
            Format::from_name("VK_FORMAT_G8_B8R8_2PLANE_420_UNORM"),
            Some(Format::G8_B8R8_2PLANE_420_UNORM)
        );
        assert!(Format::G8_B8R8_2PLANE_420_UNORM.is_ycbcr());
        assert!(!Format::D32_SFLOAT.is_ycbcr());
    }
}
